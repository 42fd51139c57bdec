//! Bandwidth selection.
//!
//! ## Purpose
//!
//! A smoother either receives a fixed bandwidth or derives one from the data.
//! The data-driven rule divides the range of `x` by a constant divisor
//! (default 100), so the kernel spans about one percent of the sample.
//!
//! ## Invariants
//!
//! * A derived bandwidth is positive whenever `x` has two distinct values.
//! * A constant `x` derives a zero bandwidth, which the validator rejects.
//!
//! ## Non-goals
//!
//! * No plug-in or cross-validated bandwidth selectors.

// External dependencies
use num_traits::Float;

/// Default divisor applied to the range of `x`.
pub const DEFAULT_RANGE_DIVISOR: f64 = 100.0;

// ============================================================================
// Bandwidth Rule
// ============================================================================

/// How the kernel bandwidth is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bandwidth<T> {
    /// Use this bandwidth as-is.
    Fixed(T),

    /// Derive `(max(x) - min(x)) / divisor` from the data.
    RangeFraction(T),
}

impl<T: Float> Default for Bandwidth<T> {
    fn default() -> Self {
        Bandwidth::RangeFraction(T::from(DEFAULT_RANGE_DIVISOR).unwrap_or_else(T::one))
    }
}

impl<T: Float> Bandwidth<T> {
    /// Resolve the bandwidth for a sample.
    pub fn resolve(&self, x: &[T]) -> T {
        match *self {
            Bandwidth::Fixed(bw) => bw,
            Bandwidth::RangeFraction(divisor) => range_bandwidth(x, divisor),
        }
    }
}

/// Range of `x`, or zero for empty input.
pub fn data_range<T: Float>(x: &[T]) -> T {
    if x.is_empty() {
        return T::zero();
    }

    let (lo, hi) = x
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    hi - lo
}

/// `(max(x) - min(x)) / divisor`.
#[inline]
pub fn range_bandwidth<T: Float>(x: &[T], divisor: T) -> T {
    data_range(x) / divisor
}
