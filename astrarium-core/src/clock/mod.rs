//! Clock state machine and calibration engine
//!
//! The [`Clock`] owns both dials and arbitrates between operator commands,
//! the periodic date/time feed, and the tick-driven calibration engine.

pub mod calibration;
pub mod controller;
pub mod dial;
pub mod status;

#[cfg(test)]
pub(crate) mod sim;

pub use calibration::{CalState, Calibration};
pub use controller::{Clock, Mode};
pub use dial::{Dial, DialId, NUM_DIALS};
pub use status::{CalStatus, ClockStatus, DialStatus};
