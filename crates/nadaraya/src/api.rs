//! High-level API for Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! collects the bandwidth and kernel options, validates them in `build()`,
//! and yields a reusable model whose `fit` smooths a sample.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every option has a default; `Nadaraya::new().build()` works.
//! * **Validated**: Configuration errors surface from `build()`, data errors
//!   from `fit()`.
//! * **Type-Safe**: Generic over `Float` types implementing [`KernelSolver`].
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NadarayaBuilder`] via `Nadaraya::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.kernel_mode()`, etc.).
//! 3. Call `.build()` and then `.fit(&x, &y)` as many times as needed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;

// Publicly re-exported types
pub use crate::algorithms::smoothing::{KernelSolver, PassOptions, SmoothPassFn};
pub use crate::engine::output::SmoothResult;
pub use crate::evaluation::accuracy::Accuracy;
pub use crate::math::bandwidth::Bandwidth;
pub use crate::primitives::backend::KernelMode;
pub use crate::primitives::errors::NadarayaError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Nadaraya-Watson smoother.
#[derive(Debug, Clone)]
pub struct NadarayaBuilder<T> {
    /// Fixed bandwidth or range rule (default: range / 100).
    pub bandwidth: Option<Bandwidth<T>>,

    /// Row reduction (default: Scalar).
    pub kernel_mode: Option<KernelMode>,

    /// Return residuals `y_i - S_i`.
    pub compute_residuals: Option<bool>,

    /// Return fit quality metrics.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Strategy name reported for a custom pass.
    #[doc(hidden)]
    pub strategy: Option<&'static str>,

    /// Rows per unit of work for partitioning passes.
    #[doc(hidden)]
    pub block_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: KernelSolver> Default for NadarayaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: KernelSolver> NadarayaBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            kernel_mode: None,
            compute_residuals: None,
            return_diagnostics: None,
            custom_smooth_pass: None,
            strategy: None,
            block_size: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Use a fixed kernel bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.mark_duplicate(self.bandwidth.is_some(), "bandwidth");
        self.bandwidth = Some(Bandwidth::Fixed(bandwidth));
        self
    }

    /// Derive the bandwidth as `(max(x) - min(x)) / divisor`.
    pub fn bandwidth_rule(mut self, divisor: T) -> Self {
        self.mark_duplicate(self.bandwidth.is_some(), "bandwidth");
        self.bandwidth = Some(Bandwidth::RangeFraction(divisor));
        self
    }

    /// Select scalar or SIMD row reduction.
    pub fn kernel_mode(mut self, mode: KernelMode) -> Self {
        self.mark_duplicate(self.kernel_mode.is_some(), "kernel_mode");
        self.kernel_mode = Some(mode);
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        self.mark_duplicate(self.compute_residuals.is_some(), "return_residuals");
        self.compute_residuals = Some(true);
        self
    }

    /// Include diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.mark_duplicate(self.return_diagnostics.is_some(), "return_diagnostics");
        self.return_diagnostics = Some(true);
        self
    }

    // ========================================================================
    // DEV
    // ========================================================================

    /// Inject a custom smoothing pass.
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, smooth_pass_fn: Option<SmoothPassFn<T>>) -> Self {
        self.custom_smooth_pass = smooth_pass_fn;
        self
    }

    /// Name reported for the injected pass.
    #[doc(hidden)]
    pub fn strategy(mut self, name: &'static str) -> Self {
        self.strategy = Some(name);
        self
    }

    /// Rows per unit of work for partitioning passes.
    #[doc(hidden)]
    pub fn block_size(mut self, rows: usize) -> Self {
        self.block_size = Some(rows);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<NadarayaModel<T>, NadarayaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(rows) = self.block_size {
            Validator::validate_chunk_size(rows, 1)?;
        }

        let bandwidth = self.bandwidth.unwrap_or_default();
        match bandwidth {
            Bandwidth::Fixed(bw) => Validator::validate_bandwidth(bw)?,
            Bandwidth::RangeFraction(divisor) => Validator::validate_divisor(divisor)?,
        }

        let config = SmoothingConfig {
            bandwidth,
            kernel_mode: self.kernel_mode.unwrap_or_default(),
            block_size: self.block_size,
            strategy: self.strategy,
            custom_smooth_pass: self.custom_smooth_pass,
        };

        Ok(NadarayaModel {
            executor: SmoothingExecutor::new(config),
            compute_residuals: self.compute_residuals.unwrap_or(false),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, reusable smoother.
#[derive(Debug, Clone)]
pub struct NadarayaModel<T> {
    executor: SmoothingExecutor<T>,
    compute_residuals: bool,
    return_diagnostics: bool,
}

impl<T: KernelSolver> NadarayaModel<T> {
    /// Configuration the model runs with.
    pub fn config(&self) -> &SmoothingConfig<T> {
        self.executor.config()
    }

    /// Smooth `y` over `x`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SmoothResult<T>, NadarayaError> {
        let output = self.executor.run(x, y)?;

        let residuals = if self.compute_residuals {
            Some(
                y.iter()
                    .zip(output.smoothed.iter())
                    .map(|(&yi, &si)| yi - si)
                    .collect::<Vec<T>>(),
            )
        } else {
            None
        };

        let diagnostics = if self.return_diagnostics {
            Some(Diagnostics::compute(y, &output.smoothed))
        } else {
            None
        };

        Ok(SmoothResult {
            x: x.to_vec(),
            y: output.smoothed,
            bandwidth: output.bandwidth,
            strategy: output.strategy,
            residuals,
            diagnostics,
        })
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Smooth with a fixed bandwidth using the reference pass.
///
/// Fails if `x` and `y` differ in length, are empty, contain non-finite
/// values, or if `bandwidth` is not positive and finite.
pub fn smooth<T: KernelSolver>(x: &[T], y: &[T], bandwidth: T) -> Result<Vec<T>, NadarayaError> {
    NadarayaBuilder::new()
        .bandwidth(bandwidth)
        .build()?
        .fit(x, y)
        .map(SmoothResult::into_smoothed)
}
