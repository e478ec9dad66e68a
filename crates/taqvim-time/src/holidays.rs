//! Holiday tables for the Persian and Islamic calendars.
//!
//! A day is a holiday when it falls on the weekly rest day or when its
//! Persian or Islamic (month, day) pair is listed.  The Islamic dates are
//! matched against the tabular calendar, so they can differ by a day from
//! an observation-based announcement.
//!
//! The process-wide table is initialised once, explicitly through
//! [`install`] at startup or lazily with [`HolidayTable::official`] on
//! first use, and is read-only afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::calendar::CalendarKind;
use crate::date::CalendarDate;
use crate::weekday::Weekday;
use taqvim_core::errors::{Error, Result};

/// Official fixed holidays of the solar Hijri calendar.
const OFFICIAL_PERSIAN: &[(u8, u8, &str)] = &[
    (1, 1, "عید نوروز"),
    (1, 2, "عید نوروز"),
    (1, 3, "عید نوروز"),
    (1, 4, "عید نوروز"),
    (1, 12, "روز جمهوری اسلامی"),
    (1, 13, "روز طبیعت"),
    (3, 14, "رحلت امام خمینی"),
    (3, 15, "قیام ۱۵ خرداد"),
    (11, 22, "پیروزی انقلاب اسلامی"),
    (12, 29, "روز ملی شدن صنعت نفت"),
];

/// Official holidays of the lunar Hijri calendar.
const OFFICIAL_ISLAMIC: &[(u8, u8, &str)] = &[
    (1, 9, "تاسوعای حسینی"),
    (1, 10, "عاشورای حسینی"),
    (2, 20, "اربعین حسینی"),
    (2, 28, "رحلت رسول اکرم و شهادت امام حسن مجتبی"),
    (2, 29, "شهادت امام رضا"),
    (3, 8, "شهادت امام حسن عسکری"),
    (3, 17, "میلاد رسول اکرم و امام جعفر صادق"),
    (6, 3, "شهادت حضرت فاطمه زهرا"),
    (7, 13, "ولادت امام علی"),
    (7, 27, "مبعث رسول اکرم"),
    (8, 15, "ولادت حضرت قائم"),
    (9, 21, "شهادت حضرت علی"),
    (10, 1, "عید سعید فطر"),
    (10, 2, "تعطیل به مناسبت عید سعید فطر"),
    (10, 25, "شهادت امام جعفر صادق"),
    (12, 10, "عید سعید قربان"),
    (12, 18, "عید سعید غدیر خم"),
];

/// Holiday labels keyed by (month, day), one map per calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    persian: BTreeMap<(u8, u8), String>,
    islamic: BTreeMap<(u8, u8), String>,
}

impl HolidayTable {
    /// A table with no listed days; only the weekly rest day is a holiday.
    pub fn empty() -> Self {
        HolidayTable {
            persian: BTreeMap::new(),
            islamic: BTreeMap::new(),
        }
    }

    /// The official Iranian holiday table.
    pub fn official() -> Self {
        let collect = |entries: &[(u8, u8, &str)]| {
            entries
                .iter()
                .map(|&(m, d, label)| ((m, d), label.to_owned()))
                .collect()
        };
        HolidayTable {
            persian: collect(OFFICIAL_PERSIAN),
            islamic: collect(OFFICIAL_ISLAMIC),
        }
    }

    fn map(&self, kind: CalendarKind) -> Option<&BTreeMap<(u8, u8), String>> {
        match kind {
            CalendarKind::Persian => Some(&self.persian),
            CalendarKind::Islamic => Some(&self.islamic),
            CalendarKind::Gregorian => None,
        }
    }

    /// List `(month, day)` of `kind` as a holiday, replacing any earlier label.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for the Gregorian calendar (it has
    /// no table) and [`Error::InvalidDate`] for a (month, day) pair that
    /// never occurs in `kind`.
    pub fn insert(
        &mut self,
        kind: CalendarKind,
        month: u8,
        day: u8,
        label: impl Into<String>,
    ) -> Result<()> {
        let (map, leap_sample) = match kind {
            CalendarKind::Persian => (&mut self.persian, 1399),
            CalendarKind::Islamic => (&mut self.islamic, 1445),
            CalendarKind::Gregorian => {
                return Err(Error::InvalidArgument(
                    "holiday tables exist only for the Persian and Islamic calendars".into(),
                ))
            }
        };
        // The longest form of the month, taken from a leap year.
        let max_day = kind.system().days_in_month(leap_sample, month)?;
        if day == 0 || day > max_day {
            return Err(Error::InvalidDate(format!(
                "{kind} holiday day {day} out of range [1, {max_day}] for month {month}"
            )));
        }
        map.insert((month, day), label.into());
        Ok(())
    }

    /// Remove a listed day, returning its label.
    pub fn remove(&mut self, kind: CalendarKind, month: u8, day: u8) -> Option<String> {
        match kind {
            CalendarKind::Persian => self.persian.remove(&(month, day)),
            CalendarKind::Islamic => self.islamic.remove(&(month, day)),
            CalendarKind::Gregorian => None,
        }
    }

    /// Return `true` if `(month, day)` is listed for `kind`.
    pub fn is_listed(&self, kind: CalendarKind, month: u8, day: u8) -> bool {
        self.label(kind, month, day).is_some()
    }

    /// Return the label of a listed day.
    pub fn label(&self, kind: CalendarKind, month: u8, day: u8) -> Option<&str> {
        self.map(kind)?.get(&(month, day)).map(String::as_str)
    }

    /// Iterate over the listed days of `kind` in (month, day) order.
    pub fn entries(&self, kind: CalendarKind) -> impl Iterator<Item = (u8, u8, &str)> + '_ {
        self.map(kind)
            .into_iter()
            .flat_map(|map| map.iter().map(|(&(m, d), label)| (m, d, label.as_str())))
    }

    /// Total number of listed days across both calendars.
    pub fn len(&self) -> usize {
        self.persian.len() + self.islamic.len()
    }

    /// Return `true` if no day is listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if a day is a holiday: the weekly rest day, or a listed
    /// Persian or Islamic date.
    pub fn is_holiday(
        &self,
        weekday: Weekday,
        persian: &CalendarDate,
        islamic: &CalendarDate,
    ) -> bool {
        weekday.is_rest_day()
            || self.is_listed_date(persian)
            || self.is_listed_date(islamic)
    }

    /// Return `true` if `date`'s (month, day) is listed for its calendar.
    pub fn is_listed_date(&self, date: &CalendarDate) -> bool {
        self.is_listed(date.kind(), date.month(), date.day())
    }

    /// Labels of every listed entry matching either date, Persian first.
    pub fn labels(&self, persian: &CalendarDate, islamic: &CalendarDate) -> Vec<&str> {
        [persian, islamic]
            .into_iter()
            .filter_map(|date| self.label(date.kind(), date.month(), date.day()))
            .collect()
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::official()
    }
}

// ── Process-wide table ────────────────────────────────────────────────────────

static CURRENT: OnceLock<HolidayTable> = OnceLock::new();

/// Install the process-wide holiday table.
///
/// Must be called before the first year is generated.
///
/// # Errors
/// Returns [`Error::Runtime`] if a table is already in place (installed
/// earlier, or defaulted by a previous [`current`] call).
pub fn install(table: HolidayTable) -> Result<()> {
    install_into(&CURRENT, table)
}

/// Return the process-wide holiday table, defaulting to
/// [`HolidayTable::official`].
pub fn current() -> &'static HolidayTable {
    CURRENT.get_or_init(HolidayTable::official)
}

fn install_into(cell: &OnceLock<HolidayTable>, table: HolidayTable) -> Result<()> {
    let (persian, islamic) = (table.persian.len(), table.islamic.len());
    cell.set(table)
        .map_err(|_| Error::Runtime("holiday table is already initialised".into()))?;
    tracing::info!(persian, islamic, "installed holiday table");
    Ok(())
}
