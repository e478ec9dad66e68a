//! Solar Hijri (Persian / Jalali) calendar.
//!
//! Uses the arithmetic 2820-year grand cycle: 683 leap years per cycle,
//! distributed by a linear congruence instead of a lookup table.  The
//! first six months have 31 days, the next five 30, and Esfand has 29
//! days (30 in a leap year).  There is no year zero: year -1 is followed
//! by year 1.

use crate::calendar::{CalendarKind, CalendarSystem};
use taqvim_core::errors::{Error, Result};
use taqvim_core::utilities::{ceil_div, floor_div, floor_mod};
use taqvim_core::{DayCount, Year};

/// Day count of 1 Farvardin 1 minus one (JD 1948320.5 is the epoch).
const EPOCH_OFFSET: DayCount = 1_948_319;

/// Length of the grand cycle in years.
const CYCLE_YEARS: i64 = 2820;

/// Length of the grand cycle in days.
const CYCLE_DAYS: i64 = 1_029_983;

/// Solar Hijri calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persian;

/// Return `true` if `year` is a leap year in the arithmetic Persian calendar.
pub fn is_leap_year(year: Year) -> bool {
    let epyear = floor_mod(epoch_base(year as i64), CYCLE_YEARS) + 474;
    ((epyear + 38) * 682) % 2816 < 682
}

/// Number of days in `month` (1–12) of `year`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for year 0 or a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> Result<u8> {
    if year == 0 {
        return Err(Error::InvalidDate(
            "the Persian calendar has no year 0".into(),
        ));
    }
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if is_leap_year(year) => Ok(30),
        12 => Ok(29),
        _ => Err(Error::InvalidDate(format!(
            "Persian month {month} out of range [1, 12]"
        ))),
    }
}

/// Years are counted from the 474 anchor of the grand cycle.
fn epoch_base(year: i64) -> i64 {
    year - if year > 0 { 474 } else { 473 }
}

fn raw_day_count(year: i64, month: i64, day: i64) -> DayCount {
    let base = epoch_base(year);
    let epyear = 474 + floor_mod(base, CYCLE_YEARS);
    let month_offset = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };
    day + month_offset
        + floor_div(epyear * 682 - 110, 2816)
        + (epyear - 1) * 365
        + floor_div(base, CYCLE_YEARS) * CYCLE_DAYS
        + EPOCH_OFFSET
}

fn raw_from_day_count(n: DayCount) -> (i64, u8, u8) {
    let depoch = n - raw_day_count(475, 1, 1);
    let cycle = floor_div(depoch, CYCLE_DAYS);
    let cyear = floor_mod(depoch, CYCLE_DAYS);
    // The last day of the grand cycle closes year 2820 of the cycle.
    let ycycle = if cyear == CYCLE_DAYS - 1 {
        CYCLE_YEARS
    } else {
        let aux1 = cyear / 366;
        let aux2 = cyear % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };
    let mut year = ycycle + CYCLE_YEARS * cycle + 474;
    if year <= 0 {
        year -= 1;
    }
    let yday = n - raw_day_count(year, 1, 1) + 1;
    let month = if yday <= 186 {
        ceil_div(yday, 31)
    } else {
        ceil_div(yday - 6, 30)
    };
    let day = n - raw_day_count(year, month, 1) + 1;
    (year, month as u8, day as u8)
}

impl CalendarSystem for Persian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Persian
    }

    fn name(&self) -> &str {
        "Persian"
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
    fn epoch_is_jd_1948320_5() {
        assert_eq!(Persian.day_count(1, 1, 1), 1_948_320);
        assert_eq!(raw_from_day_count(1_948_320), (1, 1, 1));
    }

    #[test]
    fn leap_years_around_1400() {
        let leaps: Vec<Year> = (1390..1420).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![1391, 1395, 1399, 1404, 1408, 1412, 1416]);
    }

    #[test]
    fn negative_years_skip_zero() {
        assert!(days_in_month(0, 1).is_err());
        // The day after the last day of year -1 is 1 Farvardin 1.
        let last = Persian.day_count(-1, 12, days_in_month(-1, 12).unwrap());
        assert_eq!(raw_from_day_count(last + 1), (1, 1, 1));
        assert!(is_leap_year(-5));
        assert_eq!(raw_from_day_count(Persian.day_count(-5, 12, 30)), (-5, 12, 30));
    }

    #[test]
    fn grand_cycle_boundary() {
        // 3294 closes the cycle that starts at 475; its last day exercises
        // the `ycycle = 2820` branch.
        assert!(is_leap_year(3294));
        assert!(!is_leap_year(3293));
        let last = Persian.day_count(3294, 12, 30);
        assert_eq!(raw_from_day_count(last), (3294, 12, 30));
        assert_eq!(raw_from_day_count(last + 1), (3295, 1, 1));
    }

    #[test]
    fn month_threshold_at_day_186() {
        // Day 186 of the year is 31 Shahrivar, day 187 is 1 Mehr.
        let start = Persian.day_count(1401, 1, 1);
        assert_eq!(raw_from_day_count(start + 185), (1401, 6, 31));
        assert_eq!(raw_from_day_count(start + 186), (1401, 7, 1));
    }

    #[test]
    fn invalid_month() {
        assert!(matches!(days_in_month(1401, 13), Err(Error::InvalidDate(_))));
        assert!(matches!(days_in_month(1401, 0), Err(Error::InvalidDate(_))));
    }
}
