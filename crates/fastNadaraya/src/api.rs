//! High-level API for parallel Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! This module extends the `nadaraya` builder with execution options: the
//! strategy that fills the output (sequential, array-expression, row
//! parallel, block parallel or bounded pool), the worker count of the pool
//! and the block size of the chunked strategy.
//!
//! ## Design notes
//!
//! * **Delegation**: Bandwidth, kernel mode and output options are forwarded
//!   to the base builder; validation stays centralized in the `nadaraya` crate.
//! * **Injection**: The selected strategy reaches the core executor through
//!   its `custom_smooth_pass` hook.
//! * **Parallel by default**: `Nadaraya::new()` smooths rows on the rayon
//!   global pool.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelNadarayaBuilder`] via `Nadaraya::new()`.
//! 2. Chain core options (`.bandwidth()`, `.kernel_mode()`) and execution
//!    options (`.execution()`, `.workers()`, `.chunk_size()`).
//! 3. Call `.build()` and then `.fit(&x, &y)` with slices, vectors or arrays.

// External dependencies
use ndarray::LinalgScalar;

// Export dependencies from nadaraya crate
use nadaraya::internals::api::{NadarayaBuilder, NadarayaModel};
use nadaraya::internals::engine::validator::Validator;

// Internal dependencies
use crate::engine::executor::{
    run_in_pool, smooth_pass_chunked, smooth_pass_parallel, DEFAULT_WORKERS,
};
use crate::engine::vectorized::smooth_pass_vectorized;
use crate::input::NadarayaInput;

// Publicly re-exported types
pub use nadaraya::internals::api::{
    smooth, Accuracy, Bandwidth, KernelMode, KernelSolver, NadarayaError, SmoothResult,
};

// ============================================================================
// Solver Bound
// ============================================================================

/// Float types every execution strategy can run on.
pub trait ParallelSolver: KernelSolver + LinalgScalar + Send + Sync {}

impl<T> ParallelSolver for T where T: KernelSolver + LinalgScalar + Send + Sync {}

// ============================================================================
// Execution
// ============================================================================

/// How the output buffer is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Rows in index order on the calling thread.
    Sequential,

    /// Rows in index order, each evaluated as `ndarray` expressions.
    Vectorized,

    /// One rayon task per row on the global pool.
    #[default]
    Parallel,

    /// Blocks of `chunk_size` rows on the global pool.
    Chunked,

    /// One task per row on a dedicated pool of `workers` threads.
    Pool,
}

impl Execution {
    /// Strategy name reported for this execution under `mode`.
    pub fn strategy_name(self, mode: KernelMode) -> &'static str {
        match (self, mode) {
            (Execution::Sequential, KernelMode::Scalar) => "direct",
            (Execution::Sequential, KernelMode::Simd) => "simd",
            (Execution::Vectorized, _) => "vectorized",
            (Execution::Parallel, KernelMode::Scalar) => "parallel",
            (Execution::Parallel, KernelMode::Simd) => "parallel_simd",
            (Execution::Chunked, KernelMode::Scalar) => "chunked",
            (Execution::Chunked, KernelMode::Simd) => "chunked_simd",
            (Execution::Pool, KernelMode::Scalar) => "pool",
            (Execution::Pool, KernelMode::Simd) => "pool_simd",
        }
    }

    /// Whether rows are distributed across threads.
    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            Execution::Parallel | Execution::Chunked | Execution::Pool
        )
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a Nadaraya-Watson smoother with parallel execution.
#[derive(Debug, Clone)]
pub struct ParallelNadarayaBuilder<T> {
    /// Base builder from the nadaraya crate.
    pub base: NadarayaBuilder<T>,

    /// Execution strategy (default: Parallel).
    pub execution: Option<Execution>,

    /// Worker threads for `Execution::Pool` (default: 4).
    pub workers: Option<usize>,

    /// Rows per block for `Execution::Chunked` (default: 1000).
    pub chunk_size: Option<usize>,

    /// Tracks if any execution parameter was set multiple times.
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: ParallelSolver> Default for ParallelNadarayaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ParallelSolver> ParallelNadarayaBuilder<T> {
    /// Create a new builder with default settings.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the nadaraya `NadarayaBuilder`
    /// * execution: `Parallel`
    pub fn new() -> Self {
        Self {
            base: NadarayaBuilder::new(),
            execution: None,
            workers: None,
            chunk_size: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Use a fixed kernel bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Derive the bandwidth as `(max(x) - min(x)) / divisor`.
    pub fn bandwidth_rule(mut self, divisor: T) -> Self {
        self.base = self.base.bandwidth_rule(divisor);
        self
    }

    /// Select scalar or SIMD row reduction.
    pub fn kernel_mode(mut self, mode: KernelMode) -> Self {
        self.base = self.base.kernel_mode(mode);
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        self.base = self.base.return_residuals();
        self
    }

    /// Include diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    // ========================================================================
    // Execution Setters
    // ========================================================================

    /// Shorthand for `Parallel` (true) or `Sequential` (false) execution.
    pub fn parallel(self, parallel: bool) -> Self {
        self.execution(if parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        })
    }

    /// Select the execution strategy.
    pub fn execution(mut self, execution: Execution) -> Self {
        self.mark_duplicate(self.execution.is_some(), "execution");
        self.execution = Some(execution);
        self
    }

    /// Worker threads of the dedicated pool.
    pub fn workers(mut self, workers: usize) -> Self {
        self.mark_duplicate(self.workers.is_some(), "workers");
        self.workers = Some(workers);
        self
    }

    /// Rows per block of the chunked strategy.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.mark_duplicate(self.chunk_size.is_some(), "chunk_size");
        self.chunk_size = Some(chunk_size);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<ParallelNadaraya<T>, NadarayaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let workers = self.workers.unwrap_or(DEFAULT_WORKERS);
        Validator::validate_workers(workers)?;
        if let Some(chunk_size) = self.chunk_size {
            Validator::validate_chunk_size(chunk_size, 1)?;
        }

        let execution = self.execution.unwrap_or_default();
        let mode = self.base.kernel_mode.unwrap_or_default();

        let mut builder = self.base;
        builder = match execution {
            Execution::Sequential => builder.custom_smooth_pass(None),
            Execution::Vectorized => builder
                .custom_smooth_pass(Some(smooth_pass_vectorized::<T>))
                .strategy(execution.strategy_name(mode)),
            Execution::Parallel | Execution::Pool => builder
                .custom_smooth_pass(Some(smooth_pass_parallel::<T>))
                .strategy(execution.strategy_name(mode)),
            Execution::Chunked => builder
                .custom_smooth_pass(Some(smooth_pass_chunked::<T>))
                .strategy(execution.strategy_name(mode)),
        };
        if let Some(chunk_size) = self.chunk_size {
            builder = builder.block_size(chunk_size);
        }

        Ok(ParallelNadaraya {
            model: builder.build()?,
            execution,
            workers,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated smoother bound to one execution strategy.
#[derive(Debug, Clone)]
pub struct ParallelNadaraya<T> {
    model: NadarayaModel<T>,
    execution: Execution,
    workers: usize,
}

impl<T: ParallelSolver> ParallelNadaraya<T> {
    /// Execution strategy of this model.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Worker threads used by `Execution::Pool`.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Smooth `y` over `x`.
    pub fn fit<I1, I2>(&self, x: &I1, y: &I2) -> Result<SmoothResult<T>, NadarayaError>
    where
        I1: NadarayaInput<T> + ?Sized,
        I2: NadarayaInput<T> + ?Sized,
    {
        let x_slice = x.as_sample_slice()?;
        let y_slice = y.as_sample_slice()?;

        match self.execution {
            Execution::Pool => run_in_pool(self.workers, || self.model.fit(x_slice, y_slice)),
            _ => self.model.fit(x_slice, y_slice),
        }
    }
}
