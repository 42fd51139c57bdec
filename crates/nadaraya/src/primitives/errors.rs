//! Error types for kernel smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while validating
//! inputs, configuring a smoother, or executing a smoothing strategy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, bandwidths).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Invariants
//!
//! * Every variant identifies which argument was rejected.
//! * Invalid input is never silently corrected.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Nadaraya-Watson smoothing.
#[derive(Debug, Clone, PartialEq)]
pub enum NadarayaError {
    /// Input arrays are empty; smoothing needs at least one point.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Bandwidth (or the divisor of a bandwidth rule) must be positive and finite.
    InvalidBandwidth(f64),

    /// A bounded worker pool needs at least one thread.
    InvalidWorkers(usize),

    /// Row block size for chunked execution is too small.
    InvalidChunkSize {
        /// The chunk size provided.
        got: usize,
        /// Minimum accepted chunk size.
        min: usize,
    },

    /// The worker pool could not be created.
    ThreadPool(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NadarayaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::InvalidWorkers(n) => write!(f, "Invalid workers: {n} (must be at least 1)"),
            Self::InvalidChunkSize { got, min } => {
                write!(f, "Invalid chunk_size: {got} (must be at least {min})")
            }
            Self::ThreadPool(msg) => write!(f, "Worker pool unavailable: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for NadarayaError {}
