//! `JulianDay`: the continuous day count every calendar converts through.
//!
//! The conversion formulas work with noon-anchored values: every Julian Day
//! they produce has a fractional part of exactly `.5`.  Values supplied from
//! outside are snapped to the civil day that contains them before use, so
//! two instants on the same civil day always map to the same calendar date.

use crate::weekday::Weekday;
use taqvim_core::errors::{Error, Result};
use taqvim_core::utilities::floor_mod;
use taqvim_core::{DayCount, Real};

/// A Julian Day value.
///
/// Invariant: the value is finite and its magnitude does not exceed
/// [`JulianDay::MAX_ABS`], so every whole day in range is exactly
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(Real);

impl JulianDay {
    /// Largest magnitude accepted: 2^53, the limit of exact integers in `f64`.
    pub const MAX_ABS: Real = 9_007_199_254_740_992.0;

    /// Create a Julian Day from a real value.
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] for NaN, infinities, and values whose
    /// magnitude exceeds [`JulianDay::MAX_ABS`].
    pub fn new(value: Real) -> Result<Self> {
        if !value.is_finite() || value.abs() > Self::MAX_ABS {
            return Err(Error::RangeExceeded(format!(
                "julian day {value} is outside ±{}",
                Self::MAX_ABS
            )));
        }
        Ok(JulianDay(value))
    }

    /// Build the noon-anchored value `n + 0.5` for whole-day count `n`.
    pub(crate) fn from_day_count(n: DayCount) -> Self {
        JulianDay(n as Real + 0.5)
    }

    /// Return the raw value.
    pub fn value(&self) -> Real {
        self.0
    }

    /// Return the whole-day count `floor(jd - 0.5)` of the civil day
    /// containing this instant.
    pub fn day_count(&self) -> DayCount {
        (self.0 - 0.5).floor() as DayCount
    }

    /// Snap to the noon-anchored `.5` value of the containing civil day.
    pub fn snapped(&self) -> Self {
        Self::from_day_count(self.day_count())
    }

    /// Return the weekday index: 0 = Saturday … 6 = Friday.
    ///
    /// Equals `(floor(jd + 1.5) + 1) mod 7` evaluated on the snapped value.
    pub fn weekday_index(&self) -> u8 {
        floor_mod(self.day_count() + 3, 7) as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.weekday_index()).unwrap_or(Weekday::Saturday)
    }

    /// Return the Julian Day `n` whole days later (or earlier when negative).
    ///
    /// # Errors
    /// Returns [`Error::RangeExceeded`] if the result leaves the supported range.
    pub fn add_days(self, n: DayCount) -> Result<Self> {
        let count = self.day_count().checked_add(n).ok_or_else(|| {
            Error::RangeExceeded(format!("julian day {} + {n} days overflows", self.0))
        })?;
        Self::new(count as Real + 0.5)
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.1}", self.0)
    }
}

impl TryFrom<Real> for JulianDay {
    type Error = Error;

    fn try_from(value: Real) -> Result<Self> {
        JulianDay::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_non_finite_and_huge_values() {
        assert!(matches!(JulianDay::new(Real::NAN), Err(Error::RangeExceeded(_))));
        assert!(matches!(
            JulianDay::new(Real::INFINITY),
            Err(Error::RangeExceeded(_))
        ));
        assert!(matches!(JulianDay::new(1e17), Err(Error::RangeExceeded(_))));
        assert!(JulianDay::new(-1e15).is_ok());
    }

    #[test]
    fn snapping_keeps_the_civil_day() {
        // 2000-01-01 runs from JD 2451544.5 (midnight) to 2451545.5.
        for raw in [2_451_544.5, 2_451_545.0, 2_451_545.49] {
            let jd = JulianDay::new(raw).unwrap();
            assert_eq!(jd.day_count(), 2_451_544);
            assert_abs_diff_eq!(jd.snapped().value(), 2_451_544.5, epsilon = 1e-9);
        }
        let next = JulianDay::new(2_451_545.5).unwrap();
        assert_eq!(next.day_count(), 2_451_545);
    }

    #[test]
    fn weekday_anchor() {
        // 2000-01-01 was a Saturday.
        let jd = JulianDay::new(2_451_544.5).unwrap();
        assert_eq!(jd.weekday_index(), 0);
        assert_eq!(jd.weekday(), Weekday::Saturday);
        // 2000-01-07 was a Friday.
        assert_eq!(jd.add_days(6).unwrap().weekday(), Weekday::Friday);
    }

    #[test]
    fn weekday_before_the_epoch_is_non_negative() {
        let jd = JulianDay::new(-10.5).unwrap();
        assert!(jd.weekday_index() < 7);
        let prev = jd.add_days(-1).unwrap();
        assert_eq!((prev.weekday_index() + 1) % 7, jd.weekday_index());
    }

    #[test]
    fn add_days_reports_overflow() {
        let jd = JulianDay::new(JulianDay::MAX_ABS - 0.5).unwrap();
        assert!(matches!(jd.add_days(10), Err(Error::RangeExceeded(_))));
    }
}
