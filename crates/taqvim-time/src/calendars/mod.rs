//! Concrete calendar systems.

/// Proleptic Gregorian calendar.
pub mod gregorian;

/// Tabular lunar Hijri calendar.
pub mod islamic;

/// Arithmetic solar Hijri calendar.
pub mod persian;

pub use gregorian::Gregorian;
pub use islamic::Islamic;
pub use persian::Persian;
