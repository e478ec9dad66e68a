//! # taqvim-core
//!
//! Core types, aliases, and error definitions for taqvim.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: primitive type aliases, the error type, and the integer
//! helpers the calendar arithmetic is written in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Floor-semantics integer division helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for Julian Day values.
pub type Real = f64;

/// Calendar year in any of the supported systems.
pub type Year = i32;

/// Whole-day count used inside the conversion formulas.
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
