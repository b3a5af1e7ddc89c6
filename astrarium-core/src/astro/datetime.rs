//! Calendar date/time value type and day-of-year math

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cumulative days at the start of each month (non-leap year)
const MONTH_START: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A validated calendar date/time, as delivered by the time feed
///
/// Fields are plain calendar values (month and day are 1-based). The core
/// never parses or formats these; the feed hands them over ready-made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Create a date/time from calendar fields
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year (365 or 366)
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Day of year, 1-based (January 1st is day 1)
pub fn year_day(year: u16, month: u8, day: u8) -> u16 {
    let idx = (month as usize).clamp(1, 12) - 1;
    let mut yd = MONTH_START[idx] + day as u16;
    if month > 2 && is_leap_year(year) {
        yd += 1;
    }
    yd
}

/// Day of year of the winter solstice (December 21st)
pub fn solstice_day(year: u16) -> u16 {
    year_day(year, 12, 21)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(2100)); // century, not divisible by 400
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn test_year_day() {
        assert_eq!(year_day(2025, 1, 1), 1);
        assert_eq!(year_day(2025, 2, 28), 59);
        assert_eq!(year_day(2025, 3, 1), 60);
        assert_eq!(year_day(2025, 12, 31), 365);

        // Leap year shifts everything after February
        assert_eq!(year_day(2024, 2, 29), 60);
        assert_eq!(year_day(2024, 3, 1), 61);
        assert_eq!(year_day(2024, 12, 31), 366);
    }

    #[test]
    fn test_solstice_day() {
        assert_eq!(solstice_day(2025), 355);
        assert_eq!(solstice_day(2024), 356);

        // Ten days between the solstice and New Year in a non-leap year
        assert_eq!(days_in_year(2025) - solstice_day(2025), 10);
    }
}
