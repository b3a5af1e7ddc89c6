//! Read-only diagnostic snapshots
//!
//! The external command surface builds its whole diagnostic/control view
//! from these; nothing else reaches into the clock's internals. Queryable
//! state is this system's substitute for explicit error reporting.

use super::calibration::CalState;
use super::controller::Mode;
use super::dial::NUM_DIALS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of one dial's motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialStatus {
    /// Current motor position in steps
    pub position: i32,
    /// Target of the last commanded move
    pub target: i32,
    /// Earliest high-to-low edge from the current calibration sweep
    pub p1: i32,
    /// Latest low-to-high edge from the current calibration sweep
    pub p2: i32,
}

/// Snapshot of the calibration engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalStatus {
    pub state: CalState,
    /// Dial currently under calibration
    pub dial_index: u8,
    /// Mode restored when calibration completes
    pub resume_mode: Mode,
    /// Per-dial zero-offsets
    pub centres: [i32; NUM_DIALS],
}

/// Full clock snapshot
///
/// A dial with no motor attached reports `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockStatus {
    pub mode: Mode,
    pub cal: CalStatus,
    pub dials: [Option<DialStatus>; NUM_DIALS],
}
