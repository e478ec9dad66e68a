//! Error types for taqvim.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum.  The `ensure!` and `fail!` convenience macros
//! build the variants from a format string.

use thiserror::Error;

/// The top-level error type used throughout taqvim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A calendar field (year, month, day) is outside the valid range for
    /// its calendar system.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A value cannot be represented by the day-count arithmetic without
    /// losing precision or overflowing the year type.
    #[error("range exceeded: {0}")]
    RangeExceeded(String),

    /// Invalid argument (malformed input text, unknown calendar name, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout taqvim.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error variant if `$cond` is false.
///
/// # Example
/// ```
/// use taqvim_core::{ensure, errors::{Error, Result}};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), InvalidDate, "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::InvalidDate(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return early with the given error variant.
///
/// # Example
/// ```
/// use taqvim_core::{fail, errors::{Error, Result}};
/// fn always_err() -> Result<()> {
///     fail!(Runtime, "something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(day: u8) -> Result<u8> {
        crate::ensure!(day >= 1, InvalidDate, "day {day} must be >= 1");
        Ok(day)
    }

    fn overflow() -> Result<()> {
        crate::fail!(RangeExceeded, "year {} overflows", i32::MAX);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidDate("day 32".into()).to_string(),
            "invalid date: day 32"
        );
        assert_eq!(
            Error::RangeExceeded("jd".into()).to_string(),
            "range exceeded: jd"
        );
        assert_eq!(Error::Runtime("boom".into()).to_string(), "boom");
    }

    #[test]
    fn ensure_builds_requested_variant() {
        assert_eq!(checked(1), Ok(1));
        assert_eq!(
            checked(0),
            Err(Error::InvalidDate("day 0 must be >= 1".into()))
        );
    }

    #[test]
    fn fail_builds_requested_variant() {
        assert_eq!(
            overflow(),
            Err(Error::RangeExceeded("year 2147483647 overflows".into()))
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<Error>();
    }
}
