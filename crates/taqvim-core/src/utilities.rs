//! Integer helpers with floor semantics.
//!
//! The calendar formulas are written in terms of `floor(a / b)` and a
//! non-negative `a mod b`; Rust's `/` and `%` truncate toward zero, which
//! gives wrong answers for pre-epoch day counts.

/// `floor(a / b)` for a positive divisor.
#[inline]
pub fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_div requires a positive divisor");
    a.div_euclid(b)
}

/// Non-negative `a mod b` for a positive divisor.
#[inline]
pub fn floor_mod(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_mod requires a positive divisor");
    a.rem_euclid(b)
}

/// `ceil(a / b)` for a positive divisor.
#[inline]
pub fn ceil_div(a: i64, b: i64) -> i64 {
    -floor_div(-a, b)
}
