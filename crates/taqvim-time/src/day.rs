//! `Day`: one calendar day seen from all three calendars.

use crate::calendar::{CalendarKind, CalendarSystem};
use crate::calendars::{Gregorian, Islamic};
use crate::date::CalendarDate;
use crate::holidays::HolidayTable;
use crate::julian_day::JulianDay;
use crate::weekday::Weekday;
use taqvim_core::ensure;
use taqvim_core::errors::Result;

/// A day of a generated Persian year.
///
/// Holds the same civil day as a Persian, a Gregorian, and an Islamic
/// date, together with its weekday, its week-of-month counter, and
/// whether it is a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedDay")
)]
pub struct Day {
    persian_date: CalendarDate,
    gregorian_date: CalendarDate,
    islamic_date: CalendarDate,
    weekday: Weekday,
    week_of_month: u8,
    is_holiday: bool,
}

impl Day {
    /// Build the record for a Persian date.
    ///
    /// # Errors
    /// Returns [`taqvim_core::Error::InvalidArgument`] if `persian_date` is
    /// not a Persian date, and [`taqvim_core::Error::RangeExceeded`] if the
    /// Gregorian or Islamic year does not fit.
    pub fn from_persian(
        persian_date: CalendarDate,
        week_of_month: u8,
        holidays: &HolidayTable,
    ) -> Result<Self> {
        ensure!(
            persian_date.kind() == CalendarKind::Persian,
            InvalidArgument,
            "expected a Persian date, got a {} date",
            persian_date.kind()
        );
        let jd = persian_date.to_jdn();
        let gregorian_date = Gregorian.from_jdn(jd)?;
        let islamic_date = Islamic.from_jdn(jd)?;
        let weekday = jd.weekday();
        let is_holiday = holidays.is_holiday(weekday, &persian_date, &islamic_date);
        Ok(Day {
            persian_date,
            gregorian_date,
            islamic_date,
            weekday,
            week_of_month,
            is_holiday,
        })
    }

    /// Return the Persian date.
    pub fn persian_date(&self) -> CalendarDate {
        self.persian_date
    }

    /// Return the Gregorian date.
    pub fn gregorian_date(&self) -> CalendarDate {
        self.gregorian_date
    }

    /// Return the Islamic date.
    pub fn islamic_date(&self) -> CalendarDate {
        self.islamic_date
    }

    /// Return the date in the requested calendar.
    pub fn date(&self, kind: CalendarKind) -> CalendarDate {
        match kind {
            CalendarKind::Persian => self.persian_date,
            CalendarKind::Gregorian => self.gregorian_date,
            CalendarKind::Islamic => self.islamic_date,
        }
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Return the weekday index (0 = Saturday … 6 = Friday).
    pub fn weekday_index(&self) -> u8 {
        self.weekday.index()
    }

    /// Return the 1-based week of the Persian month this day falls in.
    pub fn week_of_month(&self) -> u8 {
        self.week_of_month
    }

    /// Return `true` if the day is a holiday.
    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    /// Return the Julian Day.
    pub fn jdn(&self) -> JulianDay {
        self.persian_date.to_jdn()
    }

    /// Labels of the listed holidays falling on this day.
    pub fn holiday_labels<'t>(&self, holidays: &'t HolidayTable) -> Vec<&'t str> {
        holidays.labels(&self.persian_date, &self.islamic_date)
    }
}

/// Week-of-month counter of a Persian date: 1 on the first of the month,
/// plus one for every Friday before it.
#[cfg(feature = "serde")]
fn week_of_month_for(persian_date: &CalendarDate) -> Result<u8> {
    let first = CalendarDate::persian(persian_date.year(), persian_date.month(), 1)?;
    let start = first.weekday().index();
    let fridays = (0..persian_date.day() - 1)
        .filter(|k| (start + k) % 7 == Weekday::LAST.index())
        .count();
    // At most five Fridays precede any day of a 31-day month.
    Ok(fridays as u8 + 1)
}

// ── serde ─────────────────────────────────────────────────────────────────────

/// Wire form of a day; every derived field is checked against the Persian
/// date before it becomes a [`Day`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedDay {
    persian_date: CalendarDate,
    gregorian_date: CalendarDate,
    islamic_date: CalendarDate,
    weekday: Weekday,
    week_of_month: u8,
    is_holiday: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedDay> for Day {
    type Error = taqvim_core::Error;

    fn try_from(raw: UncheckedDay) -> Result<Self> {
        // The holiday table may differ from the one in force here, so only
        // the weekly rest day is checked for the flag.
        let derived = Day::from_persian(
            raw.persian_date,
            week_of_month_for(&raw.persian_date)?,
            &HolidayTable::empty(),
        )?;
        ensure!(
            raw.gregorian_date == derived.gregorian_date
                && raw.islamic_date == derived.islamic_date,
            InvalidDate,
            "{} does not match {} and {}",
            raw.persian_date,
            raw.gregorian_date,
            raw.islamic_date
        );
        ensure!(
            raw.weekday == derived.weekday,
            InvalidDate,
            "{} is a {}, not a {}",
            raw.persian_date,
            derived.weekday,
            raw.weekday
        );
        ensure!(
            raw.week_of_month == derived.week_of_month,
            InvalidDate,
            "{} falls in week {}, not week {}",
            raw.persian_date,
            derived.week_of_month,
            raw.week_of_month
        );
        ensure!(
            raw.is_holiday || !derived.is_holiday,
            InvalidDate,
            "{} is a {} and must be a holiday",
            raw.persian_date,
            derived.weekday
        );
        Ok(Day {
            is_holiday: raw.is_holiday,
            ..derived
        })
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "persian={} gregorian={} islamic={} weekday={}",
            self.persian_date, self.gregorian_date, self.islamic_date, self.weekday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqvim_core::Error;

    #[test]
    fn projections_of_nowruz_1401() {
        let table = HolidayTable::official();
        let date = CalendarDate::persian(1401, 1, 1).unwrap();
        let day = Day::from_persian(date, 1, &table).unwrap();
        assert_eq!(day.gregorian_date().ymd(), (2022, 3, 21));
        assert_eq!(day.islamic_date().ymd(), (1443, 8, 17));
        assert_eq!(day.weekday(), Weekday::Monday);
        assert_eq!(day.weekday_index(), 2);
        assert!(day.is_holiday());
        assert_eq!(day.holiday_labels(&table), vec!["عید نوروز"]);
        assert_eq!(day.date(CalendarKind::Islamic), day.islamic_date());
    }

    #[test]
    fn plain_working_day() {
        // 5 Mordad 1401 is a Wednesday with no listed holiday.
        let table = HolidayTable::official();
        let date = CalendarDate::persian(1401, 5, 5).unwrap();
        let day = Day::from_persian(date, 2, &table).unwrap();
        assert_eq!(day.weekday(), Weekday::Wednesday);
        assert!(!day.is_holiday());
        assert!(day.holiday_labels(&table).is_empty());
        assert_eq!(day.week_of_month(), 2);
    }

    #[test]
    fn rejects_non_persian_dates() {
        let date = CalendarDate::gregorian(2022, 3, 21).unwrap();
        assert!(matches!(
            Day::from_persian(date, 1, &HolidayTable::official()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
