//! Execution engine for Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! The executor validates inputs, resolves the bandwidth, allocates the
//! output buffer and runs one smoothing pass over it. The pass is either one
//! of the sequential passes of this crate or a pass injected by an extension
//! crate through [`SmoothPassFn`].
//!
//! ## Design notes
//!
//! * **Fresh output**: Every run allocates its own output vector.
//! * **Read-only inputs**: Passes receive `&[T]` and cannot mutate the sample.
//!
//! ## Invariants
//!
//! * The bandwidth handed to a pass is positive and finite.
//! * The output has exactly `x.len()` elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::smoothing::{
    smooth_pass_sequential, KernelSolver, PassOptions, SmoothPassFn,
};
use crate::engine::validator::Validator;
use crate::math::bandwidth::Bandwidth;
use crate::primitives::backend::KernelMode;
use crate::primitives::errors::NadarayaError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a smoothing run.
#[derive(Debug, Clone)]
pub struct SmoothingConfig<T> {
    /// Fixed bandwidth or data-driven rule.
    pub bandwidth: Bandwidth<T>,

    /// Row reduction.
    pub kernel_mode: KernelMode,

    /// Rows per unit of work for partitioning passes.
    pub block_size: Option<usize>,

    /// Name reported in results when a custom pass is injected.
    pub strategy: Option<&'static str>,

    /// Custom smoothing pass (enables parallel execution).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

impl<T: KernelSolver> Default for SmoothingConfig<T> {
    fn default() -> Self {
        Self {
            bandwidth: Bandwidth::default(),
            kernel_mode: KernelMode::default(),
            block_size: None,
            strategy: None,
            custom_smooth_pass: None,
        }
    }
}

/// Output of a smoothing run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Smoothed values aligned by index with the input.
    pub smoothed: Vec<T>,

    /// Bandwidth actually used.
    pub bandwidth: T,

    /// Name of the pass that produced `smoothed`.
    pub strategy: &'static str,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a single smoothing pass under a validated configuration.
#[derive(Debug, Clone)]
pub struct SmoothingExecutor<T> {
    config: SmoothingConfig<T>,
}

impl<T: KernelSolver> SmoothingExecutor<T> {
    /// Create an executor from a configuration.
    pub fn new(config: SmoothingConfig<T>) -> Self {
        Self { config }
    }

    /// Access the configuration.
    pub fn config(&self) -> &SmoothingConfig<T> {
        &self.config
    }

    /// Pass function and name selected by the configuration.
    fn select_pass(&self) -> (SmoothPassFn<T>, &'static str) {
        match self.config.custom_smooth_pass {
            Some(pass) => (pass, self.config.strategy.unwrap_or("custom")),
            None => (smooth_pass_sequential::<T>, self.config.kernel_mode.name()),
        }
    }

    /// Validate the inputs and smooth them.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<ExecutorOutput<T>, NadarayaError> {
        Validator::validate_inputs(x, y)?;

        if let Bandwidth::RangeFraction(divisor) = self.config.bandwidth {
            Validator::validate_divisor(divisor)?;
        }
        let bandwidth = self.config.bandwidth.resolve(x);
        Validator::validate_bandwidth(bandwidth)?;

        let (pass, strategy) = self.select_pass();
        let options = PassOptions {
            kernel_mode: self.config.kernel_mode,
            block_size: self.config.block_size,
        };
        let mut smoothed = vec![T::zero(); x.len()];
        pass(x, y, bandwidth, options, &mut smoothed);

        Ok(ExecutorOutput {
            smoothed,
            bandwidth,
            strategy,
        })
    }
}
