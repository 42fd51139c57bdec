//! Input abstractions for Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! This module lets `fit` accept slices, vectors and 1-D `ndarray` arrays
//! through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the existing buffer.
//! * **Fail-fast**: Strided arrays are rejected before any work is done.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the container.
//! * Non-contiguous inputs return `NadarayaError::InvalidInput`.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from nadaraya crate
use nadaraya::internals::primitives::errors::NadarayaError;

/// Types that can be smoothed as a contiguous 1-D sample.
pub trait NadarayaInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_sample_slice(&self) -> Result<&[T], NadarayaError>;
}

impl<T: Float> NadarayaInput<T> for [T] {
    fn as_sample_slice(&self) -> Result<&[T], NadarayaError> {
        Ok(self)
    }
}

impl<T: Float> NadarayaInput<T> for Vec<T> {
    fn as_sample_slice(&self) -> Result<&[T], NadarayaError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> NadarayaInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sample_slice(&self) -> Result<&[T], NadarayaError> {
        self.as_slice().ok_or_else(|| {
            NadarayaError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
