//! Data-driven simulation constants
//!
//! The tracer inherits several empirically tuned magic numbers from the
//! original puzzle (forward epsilon, target tolerance, ray extension). They
//! have no derivation beyond "small positive" or "longer than the play-area
//! diagonal", so they stay named and adjustable here instead of being
//! scattered as literals.

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;
use std::path::Path;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Maximum mirror bounces resolved per trace.
    pub max_bounces: u32,
    /// Length the ray is extended to when intersecting mirror segments.
    /// Must exceed any realistic play-area diagonal.
    pub ray_extension: f32,
    /// Minimum forward travel before a mirror hit counts; rejects re-hitting
    /// the surface a ray just reflected off.
    pub forward_epsilon: f32,
    /// |determinant| below this treats ray and mirror as parallel (no hit).
    pub parallel_epsilon: f32,
    /// Extra padding around the target radius for contact detection.
    pub target_tolerance: f32,
    /// Sustained contact required for a full charge, in milliseconds.
    pub charge_duration_ms: f64,
    /// Orientation increment per rotate trigger.
    pub rotate_step: f32,
    /// Half-length of every mirror segment.
    pub mirror_half_length: f32,
    /// Emitter's distance below the top edge of the play area.
    pub emitter_drop: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_bounces: 20,
            ray_extension: 2000.0,
            forward_epsilon: 5.0,
            parallel_epsilon: 1e-6,
            target_tolerance: 5.0,
            charge_duration_ms: 2000.0,
            rotate_step: FRAC_PI_4,
            mirror_half_length: 40.0,
            emitter_drop: 20.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for writing a template tuning file).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
