//! # taqvim-time
//!
//! Persian (solar Hijri), Gregorian, and Islamic (lunar Hijri) calendar
//! conversion, and generation of an annotated Persian year.
//!
//! Every conversion goes through the [`JulianDay`]:
//!
//! ```
//! use taqvim_time::{CalendarDate, CalendarKind};
//!
//! let nowruz = CalendarDate::persian(1403, 1, 1)?;
//! let gregorian = nowruz.convert(CalendarKind::Gregorian)?;
//! assert_eq!(gregorian.ymd(), (2024, 3, 20));
//! # Ok::<(), taqvim_core::Error>(())
//! ```
//!
//! A year is generated day by day:
//!
//! ```
//! let days = taqvim_time::generate_days(1401)?;
//! assert_eq!(days.len(), 365);
//! assert!(days[0].is_holiday());
//! # Ok::<(), taqvim_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarSystem` trait and the `CalendarKind` tag.
pub mod calendar;

/// Concrete calendar systems.
pub mod calendars;

/// `CalendarDate` type.
pub mod date;

/// `Day`: a day annotated in all three calendars.
pub mod day;

/// Holiday tables and the process-wide table.
pub mod holidays;

/// `JulianDay`: the common day count.
pub mod julian_day;

/// Month-name tables.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

/// Day-by-day generation of a Persian year.
pub mod year_walker;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{CalendarKind, CalendarSystem};
pub use calendars::{Gregorian, Islamic, Persian};
pub use date::CalendarDate;
pub use day::Day;
pub use holidays::HolidayTable;
pub use julian_day::JulianDay;
pub use month::{month_name, GREGORIAN_MONTHS, ISLAMIC_MONTHS, PERSIAN_MONTHS};
pub use weekday::{Weekday, WEEKDAYS};
pub use year_walker::{generate_days, generate_days_with, month_spans, MonthSpan, YearWalker};
