//! Year walker: the annotated day sequence of one Persian year.
//!
//! [`YearWalker`] starts at 1 Farvardin and advances one civil day at a
//! time until the next Persian year begins.  Besides the three calendar
//! projections it tracks the week-of-month counter:
//!
//! * the counter starts at 1 on the first day of every Persian month, even
//!   when the month begins mid-week;
//! * it is incremented after every Friday (the last day of the week).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::calendar::{CalendarKind, CalendarSystem};
use crate::calendars::persian::{self, Persian};
use crate::date::CalendarDate;
use crate::day::Day;
use crate::holidays::{self, HolidayTable};
use crate::weekday::Weekday;
use taqvim_core::errors::{Error, Result};
use taqvim_core::Year;

/// Lazily yields the [`Day`]s of one Persian year in order.
///
/// The walker is finite and cannot be restarted; build a new one to walk
/// the year again.
#[derive(Debug, Clone)]
pub struct YearWalker<'a> {
    year: Year,
    next_year: Year,
    current: Option<CalendarDate>,
    week_of_month: u8,
    holidays: &'a HolidayTable,
}

impl YearWalker<'static> {
    /// Walk `year` using the process-wide holiday table.
    ///
    /// # Errors
    /// See [`YearWalker::with_holidays`].
    pub fn new(year: Year) -> Result<Self> {
        Self::with_holidays(year, holidays::current())
    }
}

impl<'a> YearWalker<'a> {
    /// Walk `year` using the given holiday table.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] for year 0, and
    /// [`Error::RangeExceeded`] if any day of the year has no
    /// representable Gregorian or Islamic equivalent.
    pub fn with_holidays(year: Year, holidays: &'a HolidayTable) -> Result<Self> {
        let first = CalendarDate::persian(year, 1, 1)?;
        let next_year = following_year(year)?;
        // Years grow monotonically with the day count, so checking both
        // ends covers every day in between.
        let last = CalendarDate::persian(year, 12, last_day_of_year(year))?;
        for date in [first, last] {
            date.convert(CalendarKind::Gregorian)?;
            date.convert(CalendarKind::Islamic)?;
        }
        Ok(YearWalker {
            year,
            next_year,
            current: Some(first),
            week_of_month: 1,
            holidays,
        })
    }

    /// Return the Persian year being walked.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the number of days not yet yielded.
    pub fn remaining(&self) -> usize {
        let Some(current) = self.current else {
            return 0;
        };
        let end = Persian.day_count(self.next_year, 1, 1);
        let start = Persian.day_count(current.year(), current.month(), current.day());
        usize::try_from(end - start).unwrap_or(0)
    }

    /// Move past `date`, resetting the week counter on month and year
    /// rollover.
    fn step(&mut self, date: CalendarDate) -> CalendarDate {
        let (year, month, day) = date.ymd();
        let month_ends = (month <= 6 && day == 31) || ((7..=11).contains(&month) && day == 30);
        let (year, month, day) = if month_ends {
            self.week_of_month = 1;
            debug!(year, month = month + 1, "month rollover");
            (year, month + 1, 1)
        } else if month == 12 && day == last_day_of_year(year) {
            self.week_of_month = 1;
            debug!(from = year, to = self.next_year, "year rollover");
            (self.next_year, 1, 1)
        } else {
            (year, month, day + 1)
        };
        CalendarDate::from_parts_unchecked(CalendarKind::Persian, year, month, day)
    }
}

impl Iterator for YearWalker<'_> {
    type Item = Result<Day>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.take()?;
        if date.year() == self.next_year {
            return None;
        }
        let day = match Day::from_persian(date, self.week_of_month, self.holidays) {
            Ok(day) => day,
            Err(err) => return Some(Err(err)),
        };
        trace!(persian = %date, week = self.week_of_month, holiday = day.is_holiday(), "day");
        if day.weekday() == Weekday::LAST {
            self.week_of_month += 1;
        }
        self.current = Some(self.step(date));
        Some(Ok(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for YearWalker<'_> {}

impl FusedIterator for YearWalker<'_> {}

/// Generate every day of Persian `persian_year` with the process-wide
/// holiday table.
///
/// # Errors
/// See [`YearWalker::with_holidays`].
pub fn generate_days(persian_year: Year) -> Result<Vec<Day>> {
    generate_days_with(persian_year, holidays::current())
}

/// Generate every day of Persian `persian_year` with an explicit holiday
/// table.
///
/// # Errors
/// See [`YearWalker::with_holidays`].
#[tracing::instrument(level = "debug", skip(holidays))]
pub fn generate_days_with(persian_year: Year, holidays: &HolidayTable) -> Result<Vec<Day>> {
    let days = YearWalker::with_holidays(persian_year, holidays)?.collect::<Result<Vec<_>>>()?;
    debug!(n_days = days.len(), "generated year");
    Ok(days)
}

/// The first and last day of one Persian month in a generated year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    first: Day,
    last: Day,
}

impl MonthSpan {
    /// Return the Persian month number (1–12).
    pub fn month(&self) -> u8 {
        self.first.persian_date().month()
    }

    /// Return the first day of the month.
    pub fn first(&self) -> Day {
        self.first
    }

    /// Return the last day of the month.
    pub fn last(&self) -> Day {
        self.last
    }

    /// Return the number of days covered.
    pub fn len(&self) -> usize {
        usize::from(self.last.persian_date().day() - self.first.persian_date().day()) + 1
    }

    /// Always `false`; a span covers at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return `true` if the span crosses a year boundary in `kind`.
    pub fn crosses_year(&self, kind: CalendarKind) -> bool {
        self.first.date(kind).year() != self.last.date(kind).year()
    }
}

/// Summarise a day sequence by Persian month, in order.
///
/// Consecutive days sharing a Persian (year, month) form one span.
pub fn month_spans(days: &[Day]) -> Vec<MonthSpan> {
    let mut spans: Vec<MonthSpan> = Vec::with_capacity(12);
    for &day in days {
        let p = day.persian_date();
        match spans.last_mut() {
            Some(span)
                if span.last.persian_date().year() == p.year()
                    && span.last.persian_date().month() == p.month() =>
            {
                span.last = day;
            }
            _ => spans.push(MonthSpan {
                first: day,
                last: day,
            }),
        }
    }
    spans
}

/// The Persian year after `year`; there is no year 0.
fn following_year(year: Year) -> Result<Year> {
    if year == -1 {
        return Ok(1);
    }
    year.checked_add(1)
        .ok_or_else(|| Error::RangeExceeded(format!("Persian year {year} has no successor")))
}

fn last_day_of_year(year: Year) -> u8 {
    if persian::is_leap_year(year) {
        30
    } else {
        29
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(year: Year) -> Vec<Day> {
        generate_days_with(year, &HolidayTable::official()).unwrap()
    }

    #[test]
    fn first_week_of_1401() {
        // 1 Farvardin 1401 is a Monday: the first Friday is the 5th, so
        // week 2 starts on Saturday the 6th.
        let days = walk(1401);
        let weeks: Vec<u8> = days[..12].iter().map(Day::week_of_month).collect();
        assert_eq!(weeks, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2]);
        assert_eq!(days[4].weekday(), Weekday::Friday);
        assert_eq!(days[5].weekday(), Weekday::Saturday);
    }

    #[test]
    fn size_hint_is_exact() {
        let table = HolidayTable::official();
        let mut walker = YearWalker::with_holidays(1399, &table).unwrap();
        assert_eq!(walker.len(), 366);
        walker.next();
        assert_eq!(walker.len(), 365);
        let rest = walker.by_ref().count();
        assert_eq!(rest, 365);
        assert_eq!(walker.len(), 0);
        assert!(walker.next().is_none());
    }

    #[test]
    fn year_zero_is_rejected() {
        assert!(matches!(
            YearWalker::with_holidays(0, &HolidayTable::empty()),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn last_representable_year_is_rejected() {
        assert!(matches!(
            YearWalker::with_holidays(Year::MAX, &HolidayTable::empty()),
            Err(Error::RangeExceeded(_))
        ));
    }

    #[test]
    fn year_minus_one_ends_before_year_one() {
        let days = walk(-1);
        assert_eq!(days.len(), 366);
        assert_eq!(days.last().unwrap().persian_date().ymd(), (-1, 12, 30));
    }

    #[test]
    fn month_spans_of_1401() {
        let days = walk(1401);
        let spans = month_spans(&days);
        assert_eq!(spans.len(), 12);
        assert_eq!(spans[0].len(), 31);
        assert_eq!(spans[6].len(), 30);
        assert_eq!(spans[11].len(), 29);
        assert_eq!(spans.iter().map(MonthSpan::len).sum::<usize>(), 365);
        // Dey 1401 runs from 22 December 2022 to 20 January 2023.
        assert_eq!(spans[9].first().gregorian_date().ymd(), (2022, 12, 22));
        assert!(spans[9].crosses_year(CalendarKind::Gregorian));
        assert!(!spans[0].crosses_year(CalendarKind::Persian));
    }
}
