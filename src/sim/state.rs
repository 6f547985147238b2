//! Puzzle simulation context
//!
//! [`PuzzleState`] owns the mirror registry, the cached beam path, and the
//! charge meter. Every mutation re-traces synchronously so the beam tracks
//! input before the next frame is drawn; the per-frame update only needs to
//! advance the charge clock, and may re-trace redundantly since the tracer
//! is pure and idempotent.

use glam::Vec2;

use super::charge::{ChargeEvent, ChargeMeter};
use super::geom::Circle;
use super::mirror::{Mirror, MirrorField};
use super::trace::{self, BeamPath, PlayArea};
use crate::Tuning;

/// Source of the target circle's current geometry.
///
/// The target is typically a laid-out visual element the core does not own,
/// so its center and radius are re-read on every recompute. `None` means
/// "not measured yet" and skips the contact test for that recompute.
pub trait TargetProvider {
    fn target(&self) -> Option<Circle>;
}

/// A fixed circle: the synthetic-geometry provider for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub Circle);

impl TargetProvider for FixedTarget {
    fn target(&self) -> Option<Circle> {
        Some(self.0)
    }
}

impl TargetProvider for Option<Circle> {
    fn target(&self) -> Option<Circle> {
        *self
    }
}

/// One frame's worth of render input: the beam to stroke plus glow state.
/// The render loop is a read-only subscriber; nothing here feeds back into
/// the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamFrame {
    pub points: Vec<Vec2>,
    pub charging: bool,
    pub progress: f32,
}

/// The complete puzzle simulation state.
pub struct PuzzleState {
    area: PlayArea,
    mirrors: MirrorField,
    /// Setup layout, kept for reset().
    initial_mirrors: MirrorField,
    charge: ChargeMeter,
    path: BeamPath,
    tuning: Tuning,
}

impl PuzzleState {
    /// Build the puzzle over a play area. The mirror count is fixed from
    /// here on. The initial trace runs without target geometry; the first
    /// `update` picks it up.
    pub fn new(width: f32, height: f32, mirrors: MirrorField, tuning: Tuning) -> Self {
        let area = PlayArea::new(width, height);
        let path = trace::trace(area, mirrors.mirrors(), None, &tuning);
        let charge = ChargeMeter::new(tuning.charge_duration_ms);
        log::info!(
            "puzzle ready: {}x{} area, {} mirrors",
            width,
            height,
            mirrors.len()
        );
        Self {
            area,
            initial_mirrors: mirrors.clone(),
            mirrors,
            charge,
            path,
            tuning,
        }
    }

    /// Re-trace against fresh target geometry and advance the charge clock.
    /// Called per frame and after every mutation; `now_ms` must not run
    /// backwards.
    pub fn update(&mut self, target: &impl TargetProvider, now_ms: f64) -> Option<ChargeEvent> {
        self.path = trace::trace(self.area, self.mirrors.mirrors(), target.target(), &self.tuning);
        self.charge.update(self.path.contact, now_ms)
    }

    /// Drag a mirror to an absolute position, then recompute synchronously.
    pub fn translate_mirror(
        &mut self,
        id: u32,
        center: Vec2,
        target: &impl TargetProvider,
        now_ms: f64,
    ) -> Option<ChargeEvent> {
        if !self.mirrors.translate(id, center) {
            log::warn!("translate ignored: unknown mirror id {id}");
            return None;
        }
        log::debug!("mirror {id} dragged to ({:.1}, {:.1})", center.x, center.y);
        self.update(target, now_ms)
    }

    /// Rotate a mirror by one rotate-step, then recompute synchronously.
    pub fn rotate_mirror(
        &mut self,
        id: u32,
        target: &impl TargetProvider,
        now_ms: f64,
    ) -> Option<ChargeEvent> {
        if !self.mirrors.rotate(id, self.tuning.rotate_step) {
            log::warn!("rotate ignored: unknown mirror id {id}");
            return None;
        }
        log::debug!("mirror {id} rotated by {:.3} rad", self.tuning.rotate_step);
        self.update(target, now_ms)
    }

    /// Viewport resize: re-derives the emitter origin and wall geometry,
    /// then recomputes.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        target: &impl TargetProvider,
        now_ms: f64,
    ) -> Option<ChargeEvent> {
        self.area = PlayArea::new(width, height);
        log::debug!("play area resized to {width}x{height}");
        self.update(target, now_ms)
    }

    /// Restore the setup mirror layout and discharge. The puzzle can then
    /// be recharged by sustained contact like a fresh session.
    pub fn reset(&mut self, target: &impl TargetProvider, now_ms: f64) -> Option<ChargeEvent> {
        self.mirrors = self.initial_mirrors.clone();
        self.charge.reset();
        log::info!("puzzle reset to setup layout");
        self.update(target, now_ms)
    }

    /// The most recently traced beam.
    pub fn path(&self) -> &BeamPath {
        &self.path
    }

    /// Snapshot for the render loop.
    pub fn frame(&self) -> BeamFrame {
        BeamFrame {
            points: self.path.points.clone(),
            charging: self.charge.is_charging(),
            progress: self.charge.progress(),
        }
    }

    pub fn mirrors(&self) -> &[Mirror] {
        self.mirrors.mirrors()
    }

    pub fn area(&self) -> PlayArea {
        self.area
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_charging(&self) -> bool {
        self.charge.is_charging()
    }

    pub fn progress(&self) -> f32 {
        self.charge.progress()
    }
}
