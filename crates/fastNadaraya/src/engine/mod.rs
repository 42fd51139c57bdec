//! Layer 5: Engine
//!
//! Execution strategies injected into the `nadaraya` executor: rayon-based
//! row and block parallelism, a bounded worker pool, and an `ndarray`
//! array-expression pass.

// Parallel execution using CPU threads
pub mod executor;

// Whole-array row evaluation with ndarray
pub mod vectorized;
