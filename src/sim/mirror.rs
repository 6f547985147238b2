//! Movable reflectors and their registry
//!
//! Mirrors are pure data records; their visuals belong to the UI layer. The
//! field is created once at puzzle setup with a fixed count and only ever
//! mutated through translate/rotate.

use glam::Vec2;

use crate::angle_to_dir;

/// A movable, rotatable mirror segment.
///
/// Zero width for intersection purposes; the endpoints derive from center,
/// orientation, and half-length. Orientation accumulates without bound -
/// every consumer goes through cos/sin, so no wrap-around normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    pub id: u32,
    pub center: Vec2,
    pub theta: f32,
    pub half_length: f32,
}

impl Mirror {
    /// Endpoints of the reflecting segment.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let along = angle_to_dir(self.theta) * self.half_length;
        (self.center - along, self.center + along)
    }
}

/// Fixed-count collection of mirrors.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorField {
    mirrors: Vec<Mirror>,
}

impl MirrorField {
    /// Build from explicit (center, orientation) placements. Ids are
    /// assigned in placement order.
    pub fn new(placements: &[(Vec2, f32)], half_length: f32) -> Self {
        let mirrors = placements
            .iter()
            .enumerate()
            .map(|(i, &(center, theta))| Mirror {
                id: i as u32,
                center,
                theta,
                half_length,
            })
            .collect();
        Self { mirrors }
    }

    /// Standard puzzle setup: `count` horizontal mirrors spread evenly
    /// across the middle band of the play area.
    pub fn standard_layout(count: usize, width: f32, height: f32, half_length: f32) -> Self {
        let spacing = width / (count as f32 + 1.0);
        let placements: Vec<(Vec2, f32)> = (0..count)
            .map(|i| (Vec2::new(spacing * (i as f32 + 1.0), height / 2.0), 0.0))
            .collect();
        Self::new(&placements, half_length)
    }

    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }

    pub fn mirrors(&self) -> &[Mirror] {
        &self.mirrors
    }

    pub fn get(&self, id: u32) -> Option<&Mirror> {
        self.mirrors.iter().find(|m| m.id == id)
    }

    /// Absolute reposition. No overlap avoidance and no bounds clamping by
    /// design: a mirror may be dragged partly or fully outside the play
    /// area. Returns false for an unknown id.
    pub fn translate(&mut self, id: u32, center: Vec2) -> bool {
        match self.mirrors.iter_mut().find(|m| m.id == id) {
            Some(mirror) => {
                mirror.center = center;
                true
            }
            None => false,
        }
    }

    /// Discrete rotation by `step` radians (one rotate trigger). Returns
    /// false for an unknown id.
    pub fn rotate(&mut self, id: u32, step: f32) -> bool {
        match self.mirrors.iter_mut().find(|m| m.id == id) {
            Some(mirror) => {
                mirror.theta += step;
                true
            }
            None => false,
        }
    }
}
