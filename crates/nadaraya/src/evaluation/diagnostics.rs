//! Goodness-of-fit diagnostics for a smoothed sample.
//!
//! ## Purpose
//!
//! Summarizes how closely the smoothed values track the observations:
//! RMSE, MAE, R^2 and the residual standard deviation.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are non-negative.
//! * R^2 <= 1.
//!
//! ## Non-goals
//!
//! * No information criteria: the Nadaraya-Watson smoother has no fitted
//!   parameter count to penalize.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a smoothed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observations and smoothed values.
    ///
    /// Both slices must have the same length; extra elements of the longer
    /// slice are ignored.
    pub fn compute(y: &[T], y_smooth: &[T]) -> Self {
        let n = y.len().min(y_smooth.len());
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
            };
        }
        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut sum_y = T::zero();
        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();
        for (&yi, &si) in y.iter().zip(y_smooth.iter()) {
            let r = yi - si;
            sum_y = sum_y + yi;
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        let y_mean = sum_y / n_t;
        let ss_tot = y
            .iter()
            .take(n)
            .fold(T::zero(), |acc, &yi| acc + (yi - y_mean) * (yi - y_mean));

        let r_squared = if ss_tot > T::zero() {
            T::one() - sum_r_sq / ss_tot
        } else if sum_r_sq == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        let rmse = (sum_r_sq / n_t).sqrt();
        let residual_sd = if n > 1 {
            let var_r = (sum_r_sq - (sum_r * sum_r) / n_t) / (n_t - T::one());
            var_r.max(T::zero()).sqrt()
        } else {
            rmse
        };

        Self {
            rmse,
            mae: sum_abs_r / n_t,
            r_squared,
            residual_sd,
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)
    }
}
