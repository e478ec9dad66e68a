//! Tabular lunar Hijri (Islamic) calendar.
//!
//! A 30-year cycle of 354- and 355-day years; odd months have 30 days,
//! even months 29, and Dhu al-Hijjah gains a thirtieth day in leap years.

use crate::calendar::{CalendarKind, CalendarSystem};
use taqvim_core::errors::{Error, Result};
use taqvim_core::utilities::{ceil_div, floor_div, floor_mod};
use taqvim_core::{DayCount, Year};

/// Day count of 1 Muharram 1 minus one (JD 1948439.5 is the epoch).
const EPOCH_OFFSET: DayCount = 1_948_438;

/// Islamic calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Islamic;

/// Return `true` if `year` is a leap year of the 30-year cycle.
pub fn is_leap_year(year: Year) -> bool {
    floor_mod(11 * year as i64 + 14, 30) < 11
}

/// Number of days in `month` (1–12) of `year`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> Result<u8> {
    match month {
        12 if is_leap_year(year) => Ok(30),
        1..=12 if month % 2 == 1 => Ok(30),
        1..=12 => Ok(29),
        _ => Err(Error::InvalidDate(format!(
            "Islamic month {month} out of range [1, 12]"
        ))),
    }
}

/// Days before the first of `month`: `ceil(29.5 * (month - 1))`.
fn month_offset(month: i64) -> i64 {
    ceil_div(59 * (month - 1), 2)
}

fn raw_day_count(year: i64, month: i64, day: i64) -> DayCount {
    day + month_offset(month) + (year - 1) * 354 + floor_div(3 + 11 * year, 30) + EPOCH_OFFSET
}

fn raw_from_day_count(n: DayCount) -> (i64, u8, u8) {
    let year = floor_div(30 * (n - (EPOCH_OFFSET + 1)) + 10_646, 10_631);
    let since_new_year = n - (29 + raw_day_count(year, 1, 1));
    // ceil(x / 29.5) == ceil(2x / 59)
    let month = (ceil_div(2 * since_new_year, 59) + 1).min(12);
    let day = n - raw_day_count(year, month, 1) + 1;
    (year, month as u8, day as u8)
}

impl CalendarSystem for Islamic {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Islamic
    }

    fn name(&self) -> &str {
        "Islamic"
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
