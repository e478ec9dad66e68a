//! Proleptic Gregorian calendar.
//!
//! Years are astronomical: year 0 exists and precedes year 1.

use crate::calendar::{CalendarKind, CalendarSystem};
use taqvim_core::errors::{Error, Result};
use taqvim_core::utilities::{floor_div, floor_mod};
use taqvim_core::{DayCount, Year};

/// Day count of 1 January 1 minus one (JD 1721425.5 is the epoch).
const EPOCH_OFFSET: DayCount = 1_721_424;

/// Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    is_leap(year as i64)
}

fn is_leap(year: i64) -> bool {
    floor_mod(year, 4) == 0 && (floor_mod(year, 100) != 0 || floor_mod(year, 400) == 0)
}

/// Number of days in `month` (1–12) of `year`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> Result<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(Error::InvalidDate(format!(
            "Gregorian month {month} out of range [1, 12]"
        ))),
    }
}

fn raw_day_count(year: i64, month: i64, day: i64) -> DayCount {
    let leap_adjust = if month <= 2 {
        0
    } else if is_leap(year) {
        -1
    } else {
        -2
    };
    EPOCH_OFFSET
        + 365 * (year - 1)
        + floor_div(year - 1, 4)
        - floor_div(year - 1, 100)
        + floor_div(year - 1, 400)
        + floor_div(367 * month - 362, 12)
        + leap_adjust
        + day
}

fn raw_from_day_count(n: DayCount) -> (i64, u8, u8) {
    let depoch = n - (EPOCH_OFFSET + 1);
    let quadricent = floor_div(depoch, 146_097);
    let dqc = floor_mod(depoch, 146_097);
    let cent = dqc / 36_524;
    let dcent = dqc % 36_524;
    let quad = dcent / 1461;
    let dquad = dcent % 1461;
    let yindex = dquad / 365;
    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // A remainder landing on a cycle boundary is the last day of the
    // previous year, not the first day of a phantom extra one.
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    let yearday = n - raw_day_count(year, 1, 1);
    let leap_adjust = if n < raw_day_count(year, 3, 1) {
        0
    } else if is_leap(year) {
        1
    } else {
        2
    };
    let month = floor_div((yearday + leap_adjust) * 12 + 373, 367);
    let day = n - raw_day_count(year, month, 1) + 1;
    (year, month as u8, day as u8)
}

impl CalendarSystem for Gregorian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
    }

    fn name(&self) -> &str {
        "Gregorian"
    }

    fn is_leap(&self, year: Year) -> bool {
        is_leap_year(year)
    }

    fn days_in_month(&self, year: Year, month: u8) -> Result<u8> {
        days_in_month(year, month)
    }

    fn day_count(&self, year: Year, month: u8, day: u8) -> DayCount {
        raw_day_count(year as i64, month as i64, day as i64)
    }

    fn ymd_from_day_count(&self, n: DayCount) -> (i64, u8, u8) {
        raw_from_day_count(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn known_day_counts() {
        assert_eq!(Gregorian.day_count(2000, 1, 1), 2_451_544);
        assert_eq!(Gregorian.day_count(1, 1, 1), 1_721_425);
        assert_eq!(raw_from_day_count(2_451_544), (2000, 1, 1));
    }

    #[test]
    fn cycle_boundaries_do_not_create_phantom_years() {
        // 31 December of a 400-year and a 4-year cycle end.
        for (y, m, d) in [(2000, 12, 31), (2004, 12, 31), (1600, 12, 31), (2100, 12, 31)] {
            let n = Gregorian.day_count(y, m, d);
            assert_eq!(raw_from_day_count(n), (y as i64, m, d));
            assert_eq!(raw_from_day_count(n + 1), (y as i64 + 1, 1, 1));
        }
    }

    #[test]
    fn february_end() {
        let n = Gregorian.day_count(2024, 2, 29);
        assert_eq!(raw_from_day_count(n + 1), (2024, 3, 1));
        let n = Gregorian.day_count(2023, 2, 28);
        assert_eq!(raw_from_day_count(n + 1), (2023, 3, 1));
    }
}
