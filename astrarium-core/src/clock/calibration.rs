//! Sensor-homing calibration engine
//!
//! An incremental state machine, advanced exactly once per stepping-loop
//! tick, that homes one dial at a time against its binary opto-sensor and
//! derives the dial's zero-offset ("centre").
//!
//! The sweep covers nearly a full revolution, recording the earliest
//! high-to-low edge and the latest low-to-high edge of the sensor window.
//! If either edge lands too close to the wrap boundary the result is not
//! trusted: the dial is rotated half a revolution away, re-zeroed there,
//! and the whole pass restarts from a different absolute reference.

use super::controller::Mode;
use super::dial::{Dial, NUM_DIALS};
use crate::traits::{HomingSensor, Motor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Initial rotation commanded at the start of a pass, to leave a possible
/// rest-on-sensor-edge position before homing
const KICK_STEPS: i32 = 10;

/// Steps held back from a full revolution when sweeping, so the sweep
/// target never collides with the wrap point
const SWEEP_BACKOFF: i32 = 10;

/// Divisor defining the untrusted band around the wrap boundary (1/20th
/// of a revolution at either end)
const NEAR_DIVISOR: i32 = 20;

/// Calibration sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalState {
    /// No calibration in progress
    Idle,
    /// Waiting for the initial kick rotation to complete
    Zero,
    /// Sweeping the revolution, watching for sensor edges
    Search,
    /// Judging whether the recorded edges are trustworthy
    Check,
    /// Rotating half a revolution away before re-homing
    Move,
    /// Pass complete; derive the centre and move on
    Done,
}

/// Calibration engine state, shared across dials
///
/// Only one dial calibrates at a time; `idx` is meaningful only while
/// `state != Idle`, and `centre[i]` is valid only once dial `i` has
/// completed a pass.
pub struct Calibration {
    state: CalState,
    /// Last sampled sensor level, for edge detection
    level: bool,
    /// Dial currently under calibration
    idx: usize,
    /// Mode to restore once every dial has calibrated
    resume_mode: Mode,
    /// Per-dial zero-offset in step units
    centre: [i32; NUM_DIALS],
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibration {
    /// Create an idle calibration engine
    pub fn new() -> Self {
        Self {
            state: CalState::Idle,
            level: false,
            idx: 0,
            resume_mode: Mode::Manual,
            centre: [0; NUM_DIALS],
        }
    }

    /// Current sub-state
    pub fn state(&self) -> CalState {
        self.state
    }

    /// Index of the dial currently under calibration
    pub fn dial_index(&self) -> usize {
        self.idx
    }

    /// Mode the clock returns to when calibration completes
    pub fn resume_mode(&self) -> Mode {
        self.resume_mode
    }

    /// Calibrated zero-offset for a dial, in step units
    pub fn centre(&self, idx: usize) -> i32 {
        self.centre[idx]
    }

    /// All calibrated centres
    pub fn centres(&self) -> [i32; NUM_DIALS] {
        self.centre
    }

    pub(crate) fn set_resume_mode(&mut self, mode: Mode) {
        self.resume_mode = mode;
    }

    /// Drop back to idle without completing the pass
    pub(crate) fn abandon(&mut self) {
        self.state = CalState::Idle;
    }

    /// Begin (or restart) a calibration pass for one dial
    ///
    /// Resets the dial's edge scratch positions and kicks the motor a few
    /// steps so a wheel resting exactly on a sensor edge moves off it.
    pub(crate) fn start<M: Motor, S>(&mut self, idx: usize, dial: &mut Dial<M, S>) {
        self.idx = idx;
        self.state = CalState::Zero;
        dial.p1 = 0;
        dial.p2 = 0;
        if let Some(motor) = dial.motor.as_mut() {
            motor.rotate(KICK_STEPS);
        }
    }

    /// Advance the engine by one step for the dial under calibration
    ///
    /// Called once per tick. A dial missing its motor or sensor makes this
    /// a no-op: the pass stalls until an operator intervenes, which is the
    /// accepted failure mode (there is no recovery without hardware).
    ///
    /// Returns the mode to restore once the last dial completes.
    pub(crate) fn advance<M: Motor, S: HomingSensor>(
        &mut self,
        dials: &mut [Dial<M, S>; NUM_DIALS],
    ) -> Option<Mode> {
        let Dial {
            motor: Some(motor),
            sensor: Some(sensor),
            p1,
            p2,
        } = &mut dials[self.idx]
        else {
            return None;
        };
        let steps = motor.steps_per_rev();
        let sweep_end = steps - SWEEP_BACKOFF;

        match self.state {
            CalState::Idle => {}
            CalState::Zero => {
                if motor.ready() {
                    self.level = sensor.level();
                    motor.seek(sweep_end);
                    self.state = CalState::Search;
                }
            }
            CalState::Search => {
                let level = sensor.level();
                let posn = motor.position();
                if posn == sweep_end {
                    self.state = CalState::Check;
                } else {
                    if level != self.level {
                        if *p1 == 0 {
                            if !level {
                                // earliest high-to-low edge
                                *p1 = posn;
                            }
                        } else if level {
                            // latest low-to-high edge
                            *p2 = posn;
                        }
                    }
                    self.level = level;
                }
            }
            CalState::Check => {
                // Edges at the extremes of the sweep mean the sensor window
                // straddles the wrap boundary; the recorded positions are
                // ambiguous there.
                let near_lo = steps / NEAR_DIVISOR;
                let near_hi = steps - steps / NEAR_DIVISOR;
                let suspect = *p1 <= near_lo || *p1 >= near_hi || *p2 <= near_lo || *p2 >= near_hi;
                if suspect {
                    motor.seek(steps / 2);
                    self.state = CalState::Move;
                } else {
                    self.state = CalState::Done;
                }
            }
            CalState::Move => {
                if motor.position() == steps / 2 {
                    // Treat this position as the new logical zero and retry
                    // the whole pass from the shifted reference
                    motor.zero();
                    let idx = self.idx;
                    self.start(idx, &mut dials[idx]);
                }
            }
            CalState::Done => {
                self.centre[self.idx] = (*p1 + *p2) / 2;
                self.idx += 1;
                if self.idx < NUM_DIALS {
                    let idx = self.idx;
                    self.start(idx, &mut dials[idx]);
                } else {
                    self.idx = 0;
                    self.state = CalState::Idle;
                    return Some(self.resume_mode);
                }
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn force_centre(&mut self, idx: usize, centre: i32) {
        self.centre[idx] = centre;
    }
}
