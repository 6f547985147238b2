//! Multi-bounce beam tracing
//!
//! The tracer is a pure function of (play area, mirrors, target): each
//! bounce resolves the nearest of {mirror hit, target contact, wall exit}
//! and either reflects or terminates. Every mutation recomputes the whole
//! trace; there is no incremental update, and calling it redundantly from a
//! frame loop is harmless.

use glam::Vec2;

use super::geom::{self, Circle, RayHit};
use super::mirror::Mirror;
use crate::{Tuning, angle_to_dir, consts};

/// Play-area extent. Origin at the top-left corner, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The fixed emitter: top-center, `drop` below the top edge.
    pub fn emitter(&self, drop: f32) -> Vec2 {
        Vec2::new(self.width / 2.0, drop)
    }
}

/// A traced beam: the ordered points from the emitter to the terminus.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamPath {
    pub points: Vec<Vec2>,
    /// Whether the trace terminated on the target.
    pub contact: bool,
}

/// Cast the beam from the emitter through up to `max_bounces` reflections.
///
/// Per bounce, the nearest mirror hit competes with a target contact on the
/// current segment; if the target wins (or nothing blocks it) the path
/// terminates at the target *center* - a stable anchor for the charge
/// glow - and reports contact. With no mirror and no target ahead, the path
/// ends at the first boundary-wall crossing. `target` is `None` when the
/// target's layout has not been measured yet; the contact test is simply
/// skipped that recompute.
pub fn trace(
    area: PlayArea,
    mirrors: &[Mirror],
    target: Option<Circle>,
    tuning: &Tuning,
) -> BeamPath {
    let mut points = Vec::with_capacity(tuning.max_bounces as usize + 2);
    let mut origin = area.emitter(tuning.emitter_drop);
    let mut angle = consts::EMITTER_ANGLE;
    points.push(origin);

    for _ in 0..tuning.max_bounces {
        let nearest = nearest_mirror_hit(origin, angle, mirrors, tuning);

        if let Some(circle) = target
            && let Some(contact_dist) = geom::circle_approach(
                origin,
                angle,
                circle,
                tuning.target_tolerance,
                tuning.ray_extension,
            )
            && nearest.is_none_or(|(hit, _)| contact_dist < hit.dist)
        {
            points.push(circle.center);
            return BeamPath {
                points,
                contact: true,
            };
        }

        match nearest {
            Some((hit, mirror_theta)) => {
                points.push(hit.point);
                angle = geom::reflect_angle(angle, mirror_theta);
                origin = hit.point;
            }
            None => {
                points.push(wall_exit(origin, angle, area, tuning.ray_extension));
                return BeamPath {
                    points,
                    contact: false,
                };
            }
        }
    }

    // Bounce budget exhausted mid-flight; close the path at the next wall.
    points.push(wall_exit(origin, angle, area, tuning.ray_extension));
    BeamPath {
        points,
        contact: false,
    }
}

/// Nearest valid mirror intersection ahead of the ray, with that mirror's
/// orientation for the reflection step.
fn nearest_mirror_hit(
    origin: Vec2,
    angle: f32,
    mirrors: &[Mirror],
    tuning: &Tuning,
) -> Option<(RayHit, f32)> {
    let mut best: Option<(RayHit, f32)> = None;
    for mirror in mirrors {
        let (a, b) = mirror.endpoints();
        if let Some(hit) = geom::segment_hit(
            origin,
            angle,
            a,
            b,
            tuning.ray_extension,
            tuning.forward_epsilon,
            tuning.parallel_epsilon,
        ) && best.is_none_or(|(best_hit, _)| hit.dist < best_hit.dist)
        {
            best = Some((hit, mirror.theta));
        }
    }
    best
}

/// First boundary-wall crossing from `origin` heading `angle`.
///
/// Checks each of the four walls reachable along the current direction and
/// takes the minimum positive crossing parameter. A mirror dragged outside
/// the play area can reflect the beam from out of bounds with no wall ahead;
/// that falls back to the extended ray tip.
fn wall_exit(origin: Vec2, angle: f32, area: PlayArea, extension: f32) -> Vec2 {
    let dir = angle_to_dir(angle);
    let mut best = f32::INFINITY;

    let mut consider = |t: f32| {
        if t > 0.0 && t < best {
            best = t;
        }
    };
    if dir.x != 0.0 {
        consider((0.0 - origin.x) / dir.x);
        consider((area.width - origin.x) / dir.x);
    }
    if dir.y != 0.0 {
        consider((0.0 - origin.y) / dir.y);
        consider((area.height - origin.y) / dir.y);
    }

    if best.is_finite() {
        origin + dir * best
    } else {
        origin + dir * extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mirror::MirrorField;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn area() -> PlayArea {
        PlayArea::new(800.0, 600.0)
    }

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn empty_field_exits_straight_down() {
        let path = trace(area(), &[], None, &tuning());
        assert_eq!(path.points.len(), 2);
        assert!(!path.contact);
        assert_eq!(path.points[0], Vec2::new(400.0, 20.0));
        let exit = path.points[1];
        assert!((exit.x - 400.0).abs() < 1e-3);
        assert!((exit.y - 600.0).abs() < 1e-3);
    }

    #[test]
    fn path_starts_at_emitter_regardless_of_mirrors() {
        let field = MirrorField::standard_layout(4, 800.0, 600.0, 40.0);
        let path = trace(area(), field.mirrors(), None, &tuning());
        assert_eq!(path.points[0], area().emitter(tuning().emitter_drop));
    }

    #[test]
    fn single_45_degree_mirror_sends_beam_horizontal() {
        // Mirror centered directly under the emitter, tilted 45 degrees.
        let field = MirrorField::new(&[(Vec2::new(400.0, 300.0), FRAC_PI_4)], 40.0);
        let path = trace(area(), field.mirrors(), None, &tuning());

        assert_eq!(path.points.len(), 3);
        let hit = path.points[1];
        assert!((hit.x - 400.0).abs() < 0.1);
        assert!((hit.y - 300.0).abs() < 0.1);

        // Second segment direction matches the reflection law for the
        // emitter angle: horizontal, toward the left wall.
        let second = path.points[2] - path.points[1];
        let expected = geom::reflect_angle(crate::consts::EMITTER_ANGLE, FRAC_PI_4);
        assert!((crate::dir_to_angle(second).abs() - PI).abs() < 1e-3);
        assert!((crate::normalize_angle(expected) - crate::dir_to_angle(second)).abs() < 1e-3);
        assert!((path.points[2].x - 0.0).abs() < 0.1, "exits the left wall");
        assert!((path.points[2].y - 300.0).abs() < 0.5);
    }

    #[test]
    fn two_mirrors_chain_two_bounces() {
        // Down to (400, 300), left to (150, 300), down again to the floor.
        let field = MirrorField::new(
            &[
                (Vec2::new(400.0, 300.0), FRAC_PI_4),
                (Vec2::new(150.0, 300.0), FRAC_PI_4),
            ],
            40.0,
        );
        let path = trace(area(), field.mirrors(), None, &tuning());
        assert_eq!(path.points.len(), 4);
        assert!((path.points[2].x - 150.0).abs() < 0.5);
        assert!((path.points[2].y - 300.0).abs() < 0.5);
        assert!((path.points[3].x - 150.0).abs() < 0.5);
        assert!((path.points[3].y - 600.0).abs() < 0.5);
        assert!(!path.contact);
    }

    #[test]
    fn target_on_beam_terminates_at_its_center() {
        let target = Circle::new(Vec2::new(400.0, 450.0), 30.0);
        let path = trace(area(), &[], Some(target), &tuning());
        assert!(path.contact);
        assert_eq!(path.points.len(), 2);
        assert_eq!(*path.points.last().unwrap(), target.center);
    }

    #[test]
    fn nearer_mirror_blocks_the_target() {
        // Mirror between emitter and target deflects the beam away.
        let field = MirrorField::new(&[(Vec2::new(400.0, 200.0), FRAC_PI_4)], 40.0);
        let target = Circle::new(Vec2::new(400.0, 450.0), 30.0);
        let path = trace(area(), field.mirrors(), Some(target), &tuning());
        assert!(!path.contact);
    }

    #[test]
    fn reflected_beam_can_reach_the_target() {
        let field = MirrorField::new(&[(Vec2::new(400.0, 300.0), FRAC_PI_4)], 40.0);
        let target = Circle::new(Vec2::new(120.0, 300.0), 30.0);
        let path = trace(area(), field.mirrors(), Some(target), &tuning());
        assert!(path.contact);
        assert_eq!(*path.points.last().unwrap(), target.center);
    }

    #[test]
    fn missing_target_skips_the_contact_test() {
        let path = trace(area(), &[], None, &tuning());
        assert!(!path.contact);
    }

    #[test]
    fn exhausted_bounce_budget_closes_at_a_wall() {
        // A staircase of 45-degree mirrors: each bounce toggles the beam
        // between leftward and downward, so four of them outlast a budget
        // of three.
        let mut tuning = tuning();
        tuning.max_bounces = 3;
        let field = MirrorField::new(
            &[
                (Vec2::new(400.0, 300.0), FRAC_PI_4),
                (Vec2::new(200.0, 300.0), FRAC_PI_4),
                (Vec2::new(200.0, 450.0), FRAC_PI_4),
                (Vec2::new(50.0, 450.0), FRAC_PI_4),
            ],
            40.0,
        );
        let path = trace(area(), field.mirrors(), None, &tuning);
        // Emitter + three bounces + the closing wall point: the maximum.
        assert_eq!(path.points.len(), tuning.max_bounces as usize + 2);
        assert_eq!(path.points[0], area().emitter(tuning.emitter_drop));
        assert!(!path.contact);
    }

    #[test]
    fn mirror_dragged_outside_still_reflects() {
        // Off-canvas mirror left of the area; beam exits through a wall
        // without contact and the trace stays well-formed.
        let field = MirrorField::new(&[(Vec2::new(400.0, 300.0), FRAC_PI_4)], 40.0);
        let mut moved = field.clone();
        assert!(moved.translate(0, Vec2::new(-100.0, 300.0)));
        let path = trace(area(), moved.mirrors(), None, &tuning());
        assert!(!path.contact);
        assert_eq!(path.points[0], area().emitter(tuning().emitter_drop));
        assert!(path.points.len() >= 2);
    }
}
