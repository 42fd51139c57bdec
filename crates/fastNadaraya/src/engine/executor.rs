//! Parallel execution engine for Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! This module provides the multi-threaded smoothing passes that are injected
//! into the `nadaraya` executor through its `SmoothPassFn` hook, plus the
//! bounded thread pool used by the `pool` strategy.
//!
//! ## Design notes
//!
//! * **Disjoint writes**: Each output slot (or block of slots) is owned by
//!   exactly one task, so no locking is needed.
//! * **Shared inputs**: `x` and `y` are borrowed immutably by every task.
//! * **Row kernels**: Rows are reduced by the core crate's scalar or SIMD
//!   accumulation, selected by `PassOptions::kernel_mode`.
//!
//! ## Key concepts
//!
//! * **Row parallelism**: `par_iter_mut` over output indices.
//! * **Block parallelism**: `par_chunks_mut` over fixed-size row blocks.
//! * **Bounded pool**: A dedicated `rayon::ThreadPool` caps the worker count.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the core `Validator`).

// External dependencies
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

// Export dependencies from nadaraya crate
use nadaraya::internals::algorithms::smoothing::{fit_row, smooth_rows, KernelSolver, PassOptions};
use nadaraya::internals::engine::validator::Validator;
use nadaraya::internals::primitives::errors::NadarayaError;

/// Rows per block when the chunked pass is given no block size.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Worker threads of the bounded pool when none are requested.
pub const DEFAULT_WORKERS: usize = 4;

// ============================================================================
// Parallel Passes
// ============================================================================

/// Smooth every row in parallel on the current rayon pool.
pub fn smooth_pass_parallel<T>(x: &[T], y: &[T], bandwidth: T, options: PassOptions, out: &mut [T])
where
    T: KernelSolver + Send + Sync,
{
    let mode = options.kernel_mode;

    out.par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = fit_row(x, y, x[i], bandwidth, mode));
}

/// Smooth blocks of `options.block_size` rows in parallel.
pub fn smooth_pass_chunked<T>(x: &[T], y: &[T], bandwidth: T, options: PassOptions, out: &mut [T])
where
    T: KernelSolver + Send + Sync,
{
    let block = options.block_size.unwrap_or(DEFAULT_CHUNK_SIZE).max(1);
    let mode = options.kernel_mode;

    out.par_chunks_mut(block)
        .enumerate()
        .for_each(|(c, rows)| smooth_rows(x, y, bandwidth, c * block, rows, mode));
}

// ============================================================================
// Bounded Pool
// ============================================================================

/// Build a dedicated pool with exactly `workers` threads.
pub fn build_pool(workers: usize) -> Result<ThreadPool, NadarayaError> {
    Validator::validate_workers(workers)?;
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("nadaraya-worker-{i}"))
        .build()
        .map_err(|e| NadarayaError::ThreadPool(e.to_string()))
}

/// Run `job` inside a bounded pool of `workers` threads.
///
/// Parallel passes invoked by `job` use the bounded pool instead of the
/// global one.
pub fn run_in_pool<R, F>(workers: usize, job: F) -> Result<R, NadarayaError>
where
    R: Send,
    F: FnOnce() -> Result<R, NadarayaError> + Send,
{
    let pool = build_pool(workers)?;
    pool.install(job)
}
