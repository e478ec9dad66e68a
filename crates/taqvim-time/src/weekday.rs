//! `Weekday`: day of the week in the Saturday-first Iranian convention.

/// Persian weekday names, indexed 0 = Saturday … 6 = Friday.
pub const WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Day of the week.
///
/// Variants are numbered 0–6 (Saturday = 0, Friday = 6).  The week starts
/// on Saturday and ends on Friday, the weekly rest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Saturday (0).
    Saturday = 0,
    /// Sunday (1).
    Sunday = 1,
    /// Monday (2).
    Monday = 2,
    /// Tuesday (3).
    Tuesday = 3,
    /// Wednesday (4).
    Wednesday = 4,
    /// Thursday (5).
    Thursday = 5,
    /// Friday (6).
    Friday = 6,
}

impl Weekday {
    /// The last day of the week, also the weekly rest day.
    pub const LAST: Weekday = Weekday::Friday;

    /// Construct from an index (0 = Saturday … 6 = Friday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Saturday),
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// Return the index (0 = Saturday … 6 = Friday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for the weekly rest day.
    pub fn is_rest_day(&self) -> bool {
        *self == Self::LAST
    }

    /// Return the following weekday.
    pub fn succ(&self) -> Self {
        match self {
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
        }
    }

    /// Return the Persian name.
    pub fn persian_name(&self) -> &'static str {
        WEEKDAYS[self.index() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.pad(name)
    }
}
