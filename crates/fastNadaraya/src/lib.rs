//! # Fast Nadaraya-Watson Kernel Smoothing
//!
//! Parallel and vectorized execution strategies for the `nadaraya` crate,
//! plus a harness that times every strategy on the same sample and reports
//! how closely each one agrees with the reference.
//!
//! ## What is Nadaraya-Watson smoothing?
//!
//! Every smoothed value is a Gaussian-weighted average of all targets:
//!
//! ```text
//! w_j  = exp(-0.5 * ((x_j - x_i) / bw)^2)
//! S[i] = sum_j(w_j * y_j) / sum_j(w_j)
//! ```
//!
//! The cost is `O(n^2)` kernel evaluations, which is what makes the choice of
//! execution strategy worth measuring.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastNadaraya::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec(vec![0.0, 0.5, 1.0, 1.5, 2.0]);
//! let y = Array1::from_vec(vec![1.0, 1.8, 3.1, 3.9, 5.2]);
//!
//! // Rows are smoothed in parallel by default
//! let model = Nadaraya::new()
//!     .bandwidth(0.5)
//!     .kernel_mode(Simd)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.strategy, "parallel_simd");
//! # Result::<(), NadarayaError>::Ok(())
//! ```
//!
//! ### Execution strategies
//!
//! | Execution    | Scalar name  | SIMD name       |
//! |--------------|--------------|-----------------|
//! | `Sequential` | `direct`     | `simd`          |
//! | `Vectorized` | `vectorized` | `vectorized`    |
//! | `Parallel`   | `parallel`   | `parallel_simd` |
//! | `Chunked`    | `chunked`    | `chunked_simd`  |
//! | `Pool`       | `pool`       | `pool_simd`     |
//!
//! ```rust
//! use fastNadaraya::prelude::*;
//! # let x = vec![0.0, 0.5, 1.0, 1.5, 2.0];
//! # let y = vec![1.0, 1.8, 3.1, 3.9, 5.2];
//!
//! let model = Nadaraya::new()
//!     .bandwidth(0.5)
//!     .execution(Pool)
//!     .workers(2)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.strategy, "pool");
//! # Result::<(), NadarayaError>::Ok(())
//! ```
//!
//! ## Comparing strategies
//!
//! The [`harness`] module generates a synthetic sample, runs each registered
//! strategy on it and reports elapsed time and accuracy relative to the first
//! (reference) strategy. The `nadaraya-compare` binary runs the standard
//! registry with configuration read from `NADARAYA_*` environment variables.
//!
//! ```rust
//! use fastNadaraya::harness::{generate_sample, Harness, HarnessConfig, Registry};
//!
//! let sample = generate_sample::<f64>(500, Some(7))?;
//! let harness = Harness::new(HarnessConfig::default().verbose(false));
//! let report = harness.run(&Registry::standard(), &sample);
//!
//! assert!(report.entries.iter().all(|e| e.error.is_none()));
//! println!("{report}");
//! # Result::<(), fastNadaraya::harness::HarnessError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 5: Engine - parallel and vectorized passes.
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Strategy timing and comparison.
pub mod harness;

pub use input::NadarayaInput;

// Standard fastNadaraya prelude.
pub mod prelude {
    pub use crate::api::{
        smooth, Accuracy, Bandwidth,
        Execution::{self, Chunked, Parallel, Pool, Sequential, Vectorized},
        KernelMode::{self, Scalar, Simd},
        NadarayaError, ParallelNadaraya, ParallelNadarayaBuilder as Nadaraya, ParallelSolver,
        SmoothResult,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
