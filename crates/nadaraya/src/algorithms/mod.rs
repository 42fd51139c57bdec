//! Layer 3: Algorithms
//!
//! This layer implements the Nadaraya-Watson row reduction and the sequential
//! smoothing passes. It is orchestrated by the engine layer.

// Row kernels and sequential passes.
pub mod smoothing;
