//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Minimum accepted year for the date/time feed
    ///
    /// Dates before this are treated as not-yet-synchronized garbage and
    /// ignored.
    pub min_year: u16,
    /// Reduce the rete angle into `[0, 360)` before pointing the dial
    ///
    /// The reference system leaves the angle unreduced; the dial motor
    /// wraps it itself. Enable only if the deployment needs the corrected
    /// wraparound for negative or over-range angles.
    pub reduce_rete: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            min_year: 2025,
            reduce_rete: false,
        }
    }
}
