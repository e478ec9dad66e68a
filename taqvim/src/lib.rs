//! # taqvim
//!
//! Conversion between the Persian (Solar Hijri), Gregorian, and tabular
//! Islamic calendars through Julian Day Numbers, plus generation of fully
//! annotated Persian years.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on the
//! individual `taqvim-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! taqvim = "0.1"
//! ```
//!
//! ```rust
//! use taqvim::time::{generate_days, CalendarDate, CalendarKind, Weekday};
//!
//! let nowruz = CalendarDate::persian(1403, 1, 1).unwrap();
//! let gregorian = nowruz.convert(CalendarKind::Gregorian).unwrap();
//! assert_eq!(gregorian.to_string(), "2024-03-20");
//! assert_eq!(nowruz.weekday(), Weekday::Wednesday);
//!
//! let days = generate_days(1403).unwrap();
//! assert_eq!(days.len(), 365);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, error definitions, and integer helpers.
pub use taqvim_core as core;

/// Julian days, calendar systems, dates, holidays, and year generation.
pub use taqvim_time as time;
