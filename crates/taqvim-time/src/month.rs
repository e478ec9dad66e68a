//! Month-name tables for the three calendar systems.

use crate::calendar::CalendarKind;

/// Persian (solar Hijri) month names, Farvardin first.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Gregorian month names, January first.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Islamic (lunar Hijri) month names, Muharram first.
pub const ISLAMIC_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع الاول",
    "ربیع الثاني",
    "جمادي الاول",
    "جمادي الثاني",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذوالقعده",
    "ذوالحجه",
];

/// Return the month-name table of a calendar system.
pub fn month_names(kind: CalendarKind) -> &'static [&'static str; 12] {
    match kind {
        CalendarKind::Persian => &PERSIAN_MONTHS,
        CalendarKind::Gregorian => &GREGORIAN_MONTHS,
        CalendarKind::Islamic => &ISLAMIC_MONTHS,
    }
}

/// Return the name of `month` (1–12) in the given calendar.
///
/// Returns `None` if the month is out of range.
pub fn month_name(kind: CalendarKind, month: u8) -> Option<&'static str> {
    let idx = usize::from(month).checked_sub(1)?;
    month_names(kind).get(idx).copied()
}
