//! Charge-up timer state machine
//!
//! Sustained target contact charges the win condition; any recompute that
//! loses contact discharges instantly - there is no debounce, a fractional
//! mirror drag zeroes the progress. Timing is wall-clock milliseconds
//! supplied by the caller, so pacing is independent of frame rate and tests
//! can drive a synthetic clock.

/// Edge-triggered notifications from the charge machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeEvent {
    /// Contact acquired; charging started.
    Started,
    /// Contact lost before completion; progress dropped to zero.
    Discharged,
    /// A full charge was sustained. Fires exactly once per cycle; the
    /// machine then returns to Idle so the puzzle can be recharged.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Charging { started_ms: f64 },
}

/// Idle/Charging timer over caller-supplied wall-clock time.
#[derive(Debug, Clone)]
pub struct ChargeMeter {
    phase: Phase,
    duration_ms: f64,
    /// Progress as of the most recent update, for reads between updates.
    progress: f32,
}

impl ChargeMeter {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            phase: Phase::Idle,
            duration_ms,
            progress: 0.0,
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.phase, Phase::Charging { .. })
    }

    /// Charge fraction in [0, 1] as of the last update.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Feed one recompute result. `now_ms` must not run backwards.
    pub fn update(&mut self, contact: bool, now_ms: f64) -> Option<ChargeEvent> {
        match self.phase {
            Phase::Idle if contact => {
                self.phase = Phase::Charging { started_ms: now_ms };
                self.progress = 0.0;
                log::debug!("charge started at {now_ms:.0}ms");
                Some(ChargeEvent::Started)
            }
            Phase::Idle => None,
            Phase::Charging { .. } if !contact => {
                self.phase = Phase::Idle;
                self.progress = 0.0;
                log::debug!("contact lost, charge discharged");
                Some(ChargeEvent::Discharged)
            }
            Phase::Charging { started_ms } => {
                let elapsed = now_ms - started_ms;
                self.progress = (elapsed / self.duration_ms).clamp(0.0, 1.0) as f32;
                if self.progress >= 1.0 {
                    // One-shot: back to Idle, progress stays readable at
                    // full for this frame.
                    self.phase = Phase::Idle;
                    self.progress = 1.0;
                    log::info!("charge completed after {elapsed:.0}ms of contact");
                    Some(ChargeEvent::Completed)
                } else {
                    None
                }
            }
        }
    }

    /// Drop back to Idle with zero progress (puzzle reset).
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.progress = 0.0;
    }
}
