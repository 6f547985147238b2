//! Deterministic simulation module
//!
//! All puzzle logic lives here. This module must stay pure and
//! deterministic:
//! - Wall-clock time is supplied by the caller, never sampled here
//! - Traces are pure functions of current obstacle/target state
//! - No rendering or platform dependencies

pub mod charge;
pub mod geom;
pub mod mirror;
pub mod state;
pub mod trace;

pub use charge::{ChargeEvent, ChargeMeter};
pub use geom::{Circle, RayHit, circle_approach, reflect_angle, segment_hit};
pub use mirror::{Mirror, MirrorField};
pub use state::{BeamFrame, FixedTarget, PuzzleState, TargetProvider};
pub use trace::{BeamPath, PlayArea, trace};
