// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros. Layout and zoom math
//! works in `f32`, where `assert_eq!` is too strict.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Epsilon for values that come out of a short chain of `f32` operations.
pub const F32_EPSILON: f32 = 1e-6;

/// Epsilon for sizes in logical pixels after fitting and scaling.
pub const PIXEL_EPSILON: f32 = 1e-2;
