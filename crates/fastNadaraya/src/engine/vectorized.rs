//! Array-expression smoothing pass.
//!
//! Each row is evaluated as a whole-array expression: the kernel row is
//! written into one reused weight buffer, the numerator is a `dot` product of
//! that buffer with `y` and the denominator is the row sum. Rows are visited
//! in index order.

// External dependencies
use ndarray::{ArrayView1, LinalgScalar};

// Export dependencies from nadaraya crate
use nadaraya::internals::algorithms::smoothing::{KernelSolver, PassOptions};
use nadaraya::internals::math::kernel::GaussianKernel;

/// Smooth every row with `ndarray` operations.
///
/// `options` is ignored; the weight vector is always evaluated in full.
pub fn smooth_pass_vectorized<T>(x: &[T], y: &[T], bandwidth: T, _options: PassOptions, out: &mut [T])
where
    T: KernelSolver + LinalgScalar,
{
    let kernel = GaussianKernel;
    let yv = ArrayView1::from(y);
    let mut weights = vec![T::zero(); x.len()];

    for (slot, &xi) in out.iter_mut().zip(x.iter()) {
        let sum_w = kernel.weights_into(x, xi, bandwidth, &mut weights);
        *slot = ArrayView1::from(&weights[..]).dot(&yv) / sum_w;
    }
}
