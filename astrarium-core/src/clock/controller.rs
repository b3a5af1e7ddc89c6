//! Top-level clock state machine
//!
//! Arbitrates between operator commands (mode changes, manual overrides),
//! the periodic date/time feed, and the tick-driven calibration engine.

use super::calibration::{CalState, Calibration};
use super::dial::{Dial, DialId, NUM_DIALS};
use super::status::{CalStatus, ClockStatus, DialStatus};
use crate::astro::{dial_targets, DateTime};
use crate::config::ClockConfig;
use crate::traits::{HomingSensor, Motor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clock operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Dials hold position; only explicit overrides move them
    Manual,
    /// Dials track the date/time feed
    Auto,
    /// Calibration in progress
    Calibrate,
}

/// The clock: two dials, the calibration engine, and the current mode
///
/// Created once at startup with the discovered motor/sensor handles and
/// mutated only by commands and the periodic tick/date-time callbacks.
/// Invariant: `mode == Calibrate` exactly when a calibration pass is
/// in progress.
pub struct Clock<M, S> {
    mode: Mode,
    dials: [Dial<M, S>; NUM_DIALS],
    cal: Calibration,
    config: ClockConfig,
}

impl<M: Motor, S: HomingSensor> Clock<M, S> {
    /// Create a clock in manual mode with calibration idle
    pub fn new(dials: [Dial<M, S>; NUM_DIALS], config: ClockConfig) -> Self {
        Self {
            mode: Mode::Manual,
            dials,
            cal: Calibration::new(),
            config,
        }
    }

    /// Current operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current calibration sub-state
    pub fn cal_state(&self) -> CalState {
        self.cal.state()
    }

    /// Calibrated zero-offset of a dial, in step units
    pub fn centre(&self, id: DialId) -> i32 {
        self.cal.centre(id.index())
    }

    /// Switch operating mode
    ///
    /// Entering `Calibrate` starts a calibration pass for dial 0. Leaving
    /// it mid-pass abandons the pass, so mode and calibration state stay
    /// consistent.
    pub fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Calibrate => self.begin_calibration(),
            _ => {
                self.cal.abandon();
                self.mode = mode;
            }
        }
    }

    /// Start calibrating, beginning with dial 0
    ///
    /// The current mode is saved so it can be restored when the last dial
    /// completes; restarting while already calibrating keeps the originally
    /// saved mode.
    pub fn begin_calibration(&mut self) {
        if self.mode != Mode::Calibrate {
            self.cal.set_resume_mode(self.mode);
        }
        self.mode = Mode::Calibrate;
        self.cal.start(0, &mut self.dials[0]);
    }

    /// Track a date/time delivered by the time feed
    ///
    /// Effective only in auto mode. Years below the configured minimum are
    /// pre-synchronization garbage and are ignored. Returns whether the
    /// dials were driven.
    pub fn apply_date_time(&mut self, dt: &DateTime) -> bool {
        if dt.year < self.config.min_year {
            return false;
        }
        if self.mode != Mode::Auto {
            return false;
        }
        self.drive_dials(dt);
        true
    }

    /// Operator override: point the dials at an explicit date/time
    ///
    /// Forces manual mode so the time feed cannot immediately move the
    /// dials back.
    pub fn goto_date_time(&mut self, dt: &DateTime) {
        self.set_mode(Mode::Manual);
        self.drive_dials(dt);
    }

    fn drive_dials(&mut self, dt: &DateTime) {
        let targets = dial_targets(dt);
        self.goto_dial(DialId::Time, targets.time.num, targets.time.den);
        let mut rete = targets.rete.num;
        if self.config.reduce_rete {
            rete = rete.rem_euclid(360);
        }
        self.goto_dial(DialId::Rete, rete, targets.rete.den);
    }

    /// Point a dial at a fraction of a revolution
    ///
    /// The fraction is converted with truncating integer division and the
    /// calibrated centre is added before the revolution-wrap remainder, so
    /// a negative fraction produces a negative, un-normalized result (the
    /// reference system's behavior; see `ClockConfig::reduce_rete`).
    ///
    /// Returns the commanded step target, or -1 if the dial has no motor.
    pub fn goto_dial(&mut self, id: DialId, num: i32, den: i32) -> i32 {
        let dial = &mut self.dials[id.index()];
        let Some(motor) = dial.motor.as_mut() else {
            return -1;
        };
        let steps = motor.steps_per_rev();
        let mut posn = (steps * num) / den;
        posn += self.cal.centre(id.index());
        posn %= steps;
        motor.rotate(posn);
        posn
    }

    /// Advance the calibration engine by one step
    ///
    /// Called once per stepping-loop tick; a no-op unless calibrating.
    pub fn on_tick(&mut self) {
        if self.mode == Mode::Calibrate {
            if let Some(resume) = self.cal.advance(&mut self.dials) {
                self.mode = resume;
            }
        }
    }

    /// One stepping-loop tick: service every motor, then the calibration
    /// engine
    ///
    /// This is the sole driver of calibration progress.
    pub fn poll(&mut self) {
        for dial in &mut self.dials {
            if let Some(motor) = dial.motor.as_mut() {
                motor.poll();
            }
        }
        self.on_tick();
    }

    /// Diagnostic snapshot for the external command surface
    pub fn status(&self) -> ClockStatus {
        let mut dials = [None; NUM_DIALS];
        for (slot, dial) in dials.iter_mut().zip(self.dials.iter()) {
            *slot = dial.motor.as_ref().map(|motor| DialStatus {
                position: motor.position(),
                target: motor.target(),
                p1: dial.p1,
                p2: dial.p2,
            });
        }
        ClockStatus {
            mode: self.mode,
            cal: CalStatus {
                state: self.cal.state(),
                dial_index: self.cal.dial_index() as u8,
                resume_mode: self.cal.resume_mode(),
                centres: self.cal.centres(),
            },
            dials,
        }
    }
}
