//! Result type for smoothing operations.
//!
//! ## Purpose
//!
//! `SmoothResult` carries the smoothed values together with the inputs they
//! belong to, the bandwidth used, and optional residuals and diagnostics.
//!
//! ## Invariants
//!
//! * `x`, `y` and (when present) `residuals` have the input length.
//! * Values stay in input order; nothing is sorted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed sample with optional residuals and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T> {
    /// Input x-values, in input order.
    pub x: Vec<T>,

    /// Smoothed values, aligned by index with `x`.
    pub y: Vec<T>,

    /// Kernel bandwidth used for the fit.
    pub bandwidth: T,

    /// Name of the execution strategy that produced `y`.
    pub strategy: &'static str,

    /// Residuals `y_i - S_i`.
    pub residuals: Option<Vec<T>>,

    /// Fit quality metrics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> SmoothResult<T> {
    /// Number of smoothed points.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the result is empty (never true for a successful fit).
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Consume the result and keep only the smoothed values.
    pub fn into_smoothed(self) -> Vec<T> {
        self.y
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Bandwidth:   {}", self.bandwidth)?;
        writeln!(f, "  Strategy:    {}", self.strategy)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();
        write!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // First and last 10 rows of long results
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
