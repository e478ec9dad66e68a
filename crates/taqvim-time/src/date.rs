//! `CalendarDate`: a (year, month, day) triple tagged with its calendar.
//!
//! A triple only means something together with its calendar system, so
//! the tag travels with the fields.  Dates are validated on construction
//! and immutable afterwards; conversion to another calendar goes through
//! [`JulianDay`].

use crate::calendar::CalendarKind;
use crate::julian_day::JulianDay;
use crate::month::month_name;
use crate::weekday::Weekday;
use taqvim_core::errors::{Error, Result};
use taqvim_core::Year;

/// A validated date in one of the supported calendars.
///
/// Ordering compares the calendar tag first, then year, month, and day, so
/// it is chronological for dates of the same calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedDate")
)]
pub struct CalendarDate {
    kind: CalendarKind,
    year: Year,
    month: u8,
    day: u8,
}

impl CalendarDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date, validating the fields against the calendar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] for a month or day that does not exist
    /// in `kind` (including Persian year 0).
    pub fn new(kind: CalendarKind, year: Year, month: u8, day: u8) -> Result<Self> {
        kind.system().validate(year, month, day)?;
        Ok(Self::from_parts_unchecked(kind, year, month, day))
    }

    /// Create a Persian (solar Hijri) date.
    pub fn persian(year: Year, month: u8, day: u8) -> Result<Self> {
        Self::new(CalendarKind::Persian, year, month, day)
    }

    /// Create a Gregorian date.
    pub fn gregorian(year: Year, month: u8, day: u8) -> Result<Self> {
        Self::new(CalendarKind::Gregorian, year, month, day)
    }

    /// Create an Islamic (lunar Hijri) date.
    pub fn islamic(year: Year, month: u8, day: u8) -> Result<Self> {
        Self::new(CalendarKind::Islamic, year, month, day)
    }

    /// Convert a Julian Day into a date of the given calendar.
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] if the year does not fit in [`Year`].
    pub fn from_jdn(kind: CalendarKind, jd: JulianDay) -> Result<Self> {
        kind.system().from_jdn(jd)
    }

    /// Parse `YYYY-MM-DD` (a leading `-` marks a negative year).
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for malformed text and
    /// [`Error::InvalidDate`] for fields outside the calendar.
    pub fn parse(kind: CalendarKind, s: &str) -> Result<Self> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let malformed = || Error::InvalidArgument(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let year: Year = y.parse().map_err(|_| malformed())?;
        let month: u8 = m.parse().map_err(|_| malformed())?;
        let day: u8 = d.parse().map_err(|_| malformed())?;
        Self::new(kind, if negative { -year } else { year }, month, day)
    }

    /// Build a date whose fields are known to be valid.
    pub(crate) fn from_parts_unchecked(kind: CalendarKind, year: Year, month: u8, day: u8) -> Self {
        debug_assert!(
            kind.system().validate(year, month, day).is_ok(),
            "invalid {kind} date {year}-{month:02}-{day:02}"
        );
        CalendarDate {
            kind,
            year,
            month,
            day,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the calendar system.
    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Return the month name in the date's own calendar.
    pub fn month_name(&self) -> &'static str {
        month_name(self.kind, self.month).unwrap_or_default()
    }

    /// Return `true` if this is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.kind
            .system()
            .days_in_month(self.year, self.month)
            .map_or(false, |last| self.day == last)
    }

    // ── Conversion ────────────────────────────────────────────────────────────

    /// Return the Julian Day of this date.
    pub fn to_jdn(&self) -> JulianDay {
        let n = self.kind.system().day_count(self.year, self.month, self.day);
        JulianDay::from_day_count(n)
    }

    /// Express the same day in another calendar.
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] if the target year does not fit.
    pub fn convert(&self, kind: CalendarKind) -> Result<Self> {
        if kind == self.kind {
            return Ok(*self);
        }
        Self::from_jdn(kind, self.to_jdn())
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.to_jdn().weekday()
    }

    /// Return the following day in the same calendar.
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] past the end of the year range.
    pub fn succ(&self) -> Result<Self> {
        Self::from_jdn(self.kind, self.to_jdn().add_days(1)?)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -(self.year as i64), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

/// Wire form of a date; validated before it becomes a [`CalendarDate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedDate {
    kind: CalendarKind,
    year: Year,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedDate> for CalendarDate {
    type Error = Error;

    fn try_from(raw: UncheckedDate) -> Result<Self> {
        CalendarDate::new(raw.kind, raw.year, raw.month, raw.day)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        CalendarDate::from_parts_unchecked(
            CalendarKind::Gregorian,
            date.year(),
            date.month() as u8,
            date.day() as u8,
        )
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(date: CalendarDate) -> Result<Self> {
        let gregorian = date.convert(CalendarKind::Gregorian)?;
        chrono::NaiveDate::from_ymd_opt(
            gregorian.year,
            u32::from(gregorian.month),
            u32::from(gregorian.day),
        )
        .ok_or_else(|| Error::RangeExceeded(format!("{gregorian} is outside chrono's range")))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_epoch_in_gregorian() {
        let epoch = CalendarDate::persian(1, 1, 1).unwrap();
        let greg = epoch.convert(CalendarKind::Gregorian).unwrap();
        assert_eq!(greg.ymd(), (622, 3, 22));
    }

    #[test]
    fn invalid_fields_are_rejected() {
        assert!(matches!(
            CalendarDate::persian(1401, 12, 30),
            Err(Error::InvalidDate(_))
        ));
        assert!(CalendarDate::persian(1399, 12, 30).is_ok());
        assert!(matches!(
            CalendarDate::gregorian(2023, 4, 31),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            CalendarDate::islamic(1446, 2, 30),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            CalendarDate::persian(0, 1, 1),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            CalendarDate::persian(1401, 1, 32),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn parse_and_display() {
        let d = CalendarDate::parse(CalendarKind::Persian, "1401-01-01").unwrap();
        assert_eq!(d.ymd(), (1401, 1, 1));
        assert_eq!(d.to_string(), "1401-01-01");
        let neg = CalendarDate::parse(CalendarKind::Persian, "-5-12-30").unwrap();
        assert_eq!(neg.ymd(), (-5, 12, 30));
        assert_eq!(neg.to_string(), "-0005-12-30");
        assert!(matches!(
            CalendarDate::parse(CalendarKind::Gregorian, "2024/03/20"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            CalendarDate::parse(CalendarKind::Gregorian, "2024-02-30"),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn nowruz_1403() {
        let nowruz = CalendarDate::persian(1403, 1, 1).unwrap();
        assert_eq!(
            nowruz.convert(CalendarKind::Gregorian).unwrap().ymd(),
            (2024, 3, 20)
        );
        assert_eq!(
            nowruz.convert(CalendarKind::Islamic).unwrap().ymd(),
            (1445, 9, 10)
        );
        assert_eq!(nowruz.weekday(), Weekday::Wednesday);
        assert_eq!(nowruz.month_name(), "فروردین");
    }

    #[test]
    fn succ_crosses_year_end() {
        let last = CalendarDate::persian(1401, 12, 29).unwrap();
        assert!(last.is_end_of_month());
        assert_eq!(last.succ().unwrap().ymd(), (1402, 1, 1));
    }

    #[test]
    fn ordering_within_a_calendar() {
        let a = CalendarDate::gregorian(2023, 12, 31).unwrap();
        let b = CalendarDate::gregorian(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn conversion_out_of_range() {
        // The arithmetic Persian year is slightly shorter than the
        // Gregorian one, so the Gregorian year still fits in i32.
        let far = CalendarDate::persian(Year::MAX, 1, 1).unwrap();
        assert_eq!(
            far.convert(CalendarKind::Gregorian).unwrap().ymd(),
            (2_147_482_495, 12, 30)
        );
        assert!(matches!(
            far.convert(CalendarKind::Islamic),
            Err(Error::RangeExceeded(_))
        ));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_interop() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(
            date.convert(CalendarKind::Persian).unwrap().ymd(),
            (1403, 1, 1)
        );
        let persian = CalendarDate::persian(1403, 1, 1).unwrap();
        assert_eq!(chrono::NaiveDate::try_from(persian).unwrap(), naive);
    }
}
