//! Beamtrace - laser mirror puzzle core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (beam tracing, mirrors, charge timer)
//! - `tuning`: Data-driven simulation constants
//!
//! Rendering, input decoding, and window/DOM plumbing are external
//! collaborators: the core consumes a play-area size and the target
//! circle's current geometry, and produces an ordered beam path plus a
//! charge status for the UI layer to draw.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Structural constants (tunable values live in [`tuning::Tuning`])
pub mod consts {
    /// Emitter direction at setup: straight down the screen.
    ///
    /// Screen coordinates, y grows downward, so "down" is +y and its angle
    /// is pi/2 under the usual (cos, sin) mapping.
    pub const EMITTER_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit direction vector for a screen-space angle (y axis points down)
#[inline]
pub fn angle_to_dir(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Screen-space angle of a direction vector
#[inline]
pub fn dir_to_angle(dir: Vec2) -> f32 {
    dir.y.atan2(dir.x)
}
