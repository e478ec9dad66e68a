//! `CalendarSystem` trait and the `CalendarKind` tag.
//!
//! Every calendar converts to and from the Julian Day; converting between
//! two calendars always goes through that common representation.

use crate::calendars::{Gregorian, Islamic, Persian};
use crate::date::CalendarDate;
use crate::julian_day::JulianDay;
use taqvim_core::errors::{Error, Result};
use taqvim_core::{DayCount, Year};

/// A calendar system.
///
/// Implementors supply the raw day-count formulas and month lengths; the
/// provided methods add validation and the range checks at the
/// `JulianDay` boundary.
pub trait CalendarSystem: std::fmt::Debug + Send + Sync {
    /// The tag identifying this system.
    fn kind(&self) -> CalendarKind;

    /// Human-readable name (e.g. `"Persian"`).
    fn name(&self) -> &str;

    /// Return `true` if `year` is a leap year in this calendar.
    fn is_leap(&self, year: Year) -> bool;

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the month (or, for calendars
    /// without a year zero, the year) does not exist.
    fn days_in_month(&self, year: Year, month: u8) -> Result<u8>;

    /// Whole-day count of a date that has already been validated.
    fn day_count(&self, year: Year, month: u8, day: u8) -> DayCount;

    /// Decompose a whole-day count into `(year, month, day)`.
    ///
    /// The year is returned unnarrowed; callers check it fits [`Year`].
    fn ymd_from_day_count(&self, n: DayCount) -> (i64, u8, u8);

    /// Number of days in `year`.
    fn days_in_year(&self, year: Year) -> Result<u16> {
        let mut total = 0u16;
        for month in 1..=12 {
            total += u16::from(self.days_in_month(year, month)?);
        }
        Ok(total)
    }

    /// Check that `(year, month, day)` names a real date in this calendar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] naming the offending field.
    fn validate(&self, year: Year, month: u8, day: u8) -> Result<()> {
        let max_day = self.days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {max_day}] for {} {year}-{month:02}",
                self.name()
            )));
        }
        Ok(())
    }

    /// Convert a date in this calendar to its Julian Day.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] for fields outside the calendar.
    fn to_jdn(&self, year: Year, month: u8, day: u8) -> Result<JulianDay> {
        self.validate(year, month, day)?;
        Ok(JulianDay::from_day_count(self.day_count(year, month, day)))
    }

    /// Convert a Julian Day to a date in this calendar.
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] if the resulting year does not fit
    /// in [`Year`].
    fn from_jdn(&self, jd: JulianDay) -> Result<CalendarDate> {
        let (year, month, day) = self.ymd_from_day_count(jd.day_count());
        let year = Year::try_from(year).map_err(|_| {
            Error::RangeExceeded(format!("{} year {year} does not fit in i32", self.name()))
        })?;
        Ok(CalendarDate::from_parts_unchecked(self.kind(), year, month, day))
    }
}

/// Tag naming one of the supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarKind {
    /// Solar Hijri (Jalali) calendar.
    Persian,
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Tabular lunar Hijri calendar.
    Islamic,
}

impl CalendarKind {
    /// All supported systems.
    pub const ALL: [CalendarKind; 3] = [
        CalendarKind::Persian,
        CalendarKind::Gregorian,
        CalendarKind::Islamic,
    ];

    /// Return the calendar implementation for this tag.
    pub fn system(self) -> &'static dyn CalendarSystem {
        match self {
            CalendarKind::Persian => &Persian,
            CalendarKind::Gregorian => &Gregorian,
            CalendarKind::Islamic => &Islamic,
        }
    }

    /// Return the lowercase identifier (`"persian"`, `"gregorian"`, `"islamic"`).
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarKind::Persian => "persian",
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Islamic => "islamic",
        }
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CalendarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "persian" | "jalali" | "solar-hijri" | "shamsi" => Ok(CalendarKind::Persian),
            "gregorian" | "miladi" => Ok(CalendarKind::Gregorian),
            "islamic" | "hijri" | "lunar-hijri" | "qamari" => Ok(CalendarKind::Islamic),
            other => Err(Error::InvalidArgument(format!(
                "unknown calendar system {other:?}"
            ))),
        }
    }
}
