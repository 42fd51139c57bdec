//! # nadaraya — Nadaraya-Watson kernel smoothing for Rust
//!
//! Gaussian-kernel regression: every fitted value is a weighted average of
//! all observed targets, with weights decaying with distance in `x`.
//!
//! ## What is Nadaraya-Watson smoothing?
//!
//! For a sample `(x_i, y_i)` and a bandwidth `bw > 0`,
//!
//! ```text
//! w_ij = exp(-0.5 * ((x_j - x_i) / bw)^2)
//! S_i  = sum_j(w_ij * y_j) / sum_j(w_ij)
//! ```
//!
//! Each `S_i` is a convex combination of the `y_j`, so it always lies within
//! `[min(y), max(y)]`. The cost is O(n^2): every row visits every point.
//!
//! ## Quick Start
//!
//! ```rust
//! use nadaraya::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 0.5, 1.0];
//! let y: Vec<f64> = vec![0.0, 1.0, 2.0];
//!
//! let model = Nadaraya::new()
//!     .bandwidth(0.5)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.y.len(), 3);
//! assert!((result.y[1] - 1.0).abs() < 1e-12);
//! # Result::<(), NadarayaError>::Ok(())
//! ```
//!
//! When no bandwidth is given, it is derived as `(max(x) - min(x)) / 100`:
//!
//! ```rust
//! use nadaraya::prelude::*;
//!
//! let x: Vec<f64> = (0..200).map(|i| i as f64 / 200.0).collect();
//! let y: Vec<f64> = x.iter().map(|&xi| 100.0 * xi + 100.0).collect();
//!
//! let result = Nadaraya::new()
//!     .kernel_mode(Simd)
//!     .return_diagnostics()
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), NadarayaError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! `fit` returns `Err(NadarayaError)` for mismatched lengths, empty input,
//! non-finite values, or a non-positive bandwidth (including the zero
//! bandwidth derived from a constant `x`). Nothing is silently corrected.
//!
//! ## no_std
//!
//! Disable default features to build without the standard library:
//!
//! ```toml
//! [dependencies]
//! nadaraya = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and execution flags.
mod primitives;

// Layer 2: Math - kernel and bandwidth.
mod math;

// Layer 3: Algorithms - row kernels and sequential passes.
mod algorithms;

// Layer 4: Evaluation - diagnostics and accuracy.
mod evaluation;

// Layer 5: Engine - validation and execution.
mod engine;

// High-level fluent API.
mod api;

pub use api::smooth;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        smooth, Accuracy, Bandwidth, KernelMode,
        KernelMode::{Scalar, Simd},
        KernelSolver, NadarayaBuilder as Nadaraya, NadarayaError, NadarayaModel, SmoothResult,
    };
}

// Internal modules for development and testing.
//
// Re-exports the layers for extension crates and integration tests. Only
// available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
