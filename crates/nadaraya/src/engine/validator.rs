//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! Checks everything the smoothing passes rely on before any work starts:
//! matching lengths, non-empty input, finite values and a positive bandwidth.
//! The passes themselves never divide by a weight sum below one, and that
//! guarantee rests on these checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Cheap length checks run before the O(n) finiteness scan.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NadarayaError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the sample arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), NadarayaError> {
        let n = x.len();
        if n != y.len() {
            return Err(NadarayaError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        if n == 0 {
            return Err(NadarayaError::EmptyInput);
        }

        for i in 0..n {
            if !x[i].is_finite() {
                return Err(NadarayaError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(NadarayaError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a kernel bandwidth: positive and finite.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), NadarayaError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(NadarayaError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the divisor of a range bandwidth rule.
    pub fn validate_divisor<T: Float>(divisor: T) -> Result<(), NadarayaError> {
        Self::validate_bandwidth(divisor)
    }

    /// Validate the size of a bounded worker pool.
    pub fn validate_workers(workers: usize) -> Result<(), NadarayaError> {
        if workers == 0 {
            return Err(NadarayaError::InvalidWorkers(workers));
        }
        Ok(())
    }

    /// Validate the row block size of chunked execution.
    pub fn validate_chunk_size(chunk_size: usize, min: usize) -> Result<(), NadarayaError> {
        if chunk_size < min {
            return Err(NadarayaError::InvalidChunkSize {
                got: chunk_size,
                min,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NadarayaError> {
        if let Some(param) = duplicate_param {
            return Err(NadarayaError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
