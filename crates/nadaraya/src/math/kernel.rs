//! Gaussian kernel for Nadaraya-Watson smoothing.
//!
//! ## Purpose
//!
//! This module maps scaled distances `u = (x_j - x_i) / bandwidth` to weights
//! `K(u) = exp(-u^2 / 2)`. The weights are unnormalized; the row kernels in
//! `algorithms::smoothing` divide by their sum.
//!
//! ## Design notes
//!
//! * **Unbounded support**: Every point contributes to every row. There is no
//!   cutoff; far points underflow to exactly zero, which is harmless because
//!   the self weight is always one.
//! * **Bandwidth division**: Distances are divided by the bandwidth itself,
//!   never multiplied by its reciprocal. The reciprocal of a subnormal
//!   bandwidth overflows, while `0 / bandwidth` stays zero.
//!
//! ## Invariants
//!
//! * `K(u) = K(-u)` and `0 <= K(u) <= K(0) = 1`.
//!
//! ## Non-goals
//!
//! * This module does not validate the bandwidth (see `engine::validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Unnormalized Gaussian kernel `K(u) = exp(-u^2 / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GaussianKernel;

impl GaussianKernel {
    /// Kernel name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        "Gaussian"
    }

    /// Weight for a scaled distance `u`.
    #[inline]
    pub fn weight<T: Float>(&self, u: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        (-half * u * u).exp()
    }

    /// Weight between two points at the given bandwidth.
    #[inline]
    pub fn pair_weight<T: Float>(&self, xj: T, xi: T, bandwidth: T) -> T {
        self.weight((xj - xi) / bandwidth)
    }

    /// Fill `weights` with the kernel row for `x_current` and return its sum.
    ///
    /// `weights` must be at least as long as `x`; extra slots are untouched.
    pub fn weights_into<T: Float>(&self, x: &[T], x_current: T, bandwidth: T, weights: &mut [T]) -> T {
        let mut sum = T::zero();
        for (w, &xj) in weights.iter_mut().zip(x.iter()) {
            *w = self.pair_weight(xj, x_current, bandwidth);
            sum = sum + *w;
        }
        sum
    }
}
