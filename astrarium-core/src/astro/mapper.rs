//! Date/time to dial-angle mapping
//!
//! Both dial targets are expressed as integer fractions of a revolution so
//! that the controller's multiply-then-divide step conversion keeps the
//! reference system's integer-domain semantics.

use super::datetime::{days_in_year, solstice_day, year_day, DateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes in a day
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A fraction of one dial revolution
///
/// The numerator may exceed the denominator (over-range) or be negative;
/// range reduction happens, if at all, when the fraction is converted to
/// steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnFraction {
    pub num: i32,
    pub den: i32,
}

impl TurnFraction {
    /// Create a fraction of a revolution
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }
}

/// Target angles for both dials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialTargets {
    /// Time-of-day dial: minutes since solar noon over minutes per day
    pub time: TurnFraction,
    /// Rete dial: whole degrees over 360
    pub rete: TurnFraction,
}

/// Map a date/time to both dial targets
///
/// The time dial's zero is solar noon, so the hour is shifted by 12. The
/// rete angle is the sum of three fractional-revolution contributions:
/// the fraction of the year elapsed, the fraction of the day elapsed, and
/// a fixed phase shift aligning the rete's reference with the winter
/// solstice rather than New Year.
///
/// The rete angle is deliberately not reduced into `[0, 360)`; on the
/// solstice itself the two year terms sum to a full revolution and the
/// dial wraps. See [`ClockConfig::reduce_rete`].
///
/// [`ClockConfig::reduce_rete`]: crate::config::ClockConfig::reduce_rete
pub fn dial_targets(dt: &DateTime) -> DialTargets {
    let minutes = ((dt.hour as i32 + 12) % 24) * 60 + dt.minute as i32;

    let yd = year_day(dt.year, dt.month, dt.day) as i32;
    let days = days_in_year(dt.year) as i32;

    // Phase shift: days between the winter solstice and New Year
    let solstice = solstice_day(dt.year) as i32;
    let offset = (days - solstice) as f64 / days as f64;

    let day_fraction = minutes as f64 / MINUTES_PER_DAY as f64;
    let year_fraction = yd as f64 / days as f64;
    let rete = (year_fraction * 360.0) + (day_fraction * 360.0) + (offset * 360.0);

    DialTargets {
        time: TurnFraction::new(minutes, MINUTES_PER_DAY),
        rete: TurnFraction::new(rete as i32, 360),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noon_is_dial_zero() {
        let dt = DateTime::new(2025, 6, 1, 12, 0, 0);
        let targets = dial_targets(&dt);
        assert_eq!(targets.time, TurnFraction::new(0, MINUTES_PER_DAY));
    }

    #[test]
    fn test_midnight_is_half_turn() {
        let dt = DateTime::new(2025, 6, 1, 0, 0, 0);
        let targets = dial_targets(&dt);
        assert_eq!(targets.time, TurnFraction::new(720, MINUTES_PER_DAY));
    }

    #[test]
    fn test_time_fraction_minutes() {
        // 15:30 -> 3.5 hours past noon
        let dt = DateTime::new(2025, 6, 1, 15, 30, 0);
        let targets = dial_targets(&dt);
        assert_eq!(targets.time, TurnFraction::new(210, MINUTES_PER_DAY));
    }

    #[test]
    fn test_rete_on_solstice_noon() {
        // On the solstice at noon the day term is zero and the two year
        // terms sum to exactly one revolution. The angle stays unreduced
        // at 360 degrees; the dial motor wraps it to zero.
        let dt = DateTime::new(2025, 12, 21, 12, 0, 0);
        let targets = dial_targets(&dt);
        assert_eq!(targets.rete, TurnFraction::new(360, 360));
    }

    #[test]
    fn test_rete_mid_year() {
        // 2025-06-01 15:30: year_day 152/365, day 210/1440, offset 10/365
        let dt = DateTime::new(2025, 6, 1, 15, 30, 0);
        let targets = dial_targets(&dt);
        assert_eq!(targets.rete, TurnFraction::new(212, 360));
    }

    #[test]
    fn test_rete_monotonic_through_afternoon() {
        // From noon to midnight the day term only grows, so the rete
        // angle is non-decreasing
        let mut last = i32::MIN;
        for hour in 12..24 {
            let dt = DateTime::new(2025, 3, 10, hour, 0, 0);
            let rete = dial_targets(&dt).rete.num;
            assert!(rete >= last);
            last = rete;
        }
    }
}
