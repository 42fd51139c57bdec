//! Nadaraya-Watson row kernels and sequential smoothing passes.
//!
//! ## Purpose
//!
//! For each query index `i` the smoother computes
//!
//! ```text
//! w_j  = exp(-0.5 * ((x_j - x_i) / bw)^2)
//! S[i] = sum_j(w_j * y_j) / sum_j(w_j)
//! ```
//!
//! This module provides the per-row accumulation `(sum_w, sum_wy)` in a
//! generic scalar form and SIMD forms for `f64` and `f32`, plus the two
//! sequential passes (direct and SIMD) that fill an output buffer.
//!
//! ## Design notes
//!
//! * **Single pass**: Weights are folded into both sums as they are produced;
//!   no per-row weight buffer is allocated.
//! * **Disjoint writes**: Passes write `out[i]` once per row, so row ranges can
//!   be handed to different threads by extension crates.
//!
//! ## Invariants
//!
//! * `sum_w >= 1` for every row when `bw > 0` (the self weight is one).
//! * Scalar accumulation visits `j` in increasing order, so it is bitwise
//!   reproducible.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x4};

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::primitives::backend::KernelMode;

/// Per-pass options handed to every smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassOptions {
    /// Row reduction.
    pub kernel_mode: KernelMode,

    /// Rows per unit of work for passes that partition the output.
    /// `None` lets the pass decide.
    pub block_size: Option<usize>,
}

/// Signature of a smoothing pass: `(x, y, bandwidth, options, out)`.
///
/// Extension crates inject parallel or vectorized passes through this hook.
pub type SmoothPassFn<T> = fn(&[T], &[T], T, PassOptions, &mut [T]);

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of `(sum_w, sum_wy)` for one row.
#[inline]
pub fn accumulate_row_scalar<T: Float>(x: &[T], y: &[T], x_current: T, bandwidth: T) -> (T, T) {
    let kernel = GaussianKernel;
    let mut sum_w = T::zero();
    let mut sum_wy = T::zero();

    for (&xj, &yj) in x.iter().zip(y.iter()) {
        let w = kernel.pair_weight(xj, x_current, bandwidth);
        sum_w = sum_w + w;
        sum_wy = sum_wy + w * yj;
    }

    (sum_w, sum_wy)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD accumulation of `(sum_w, sum_wy)` for one row (f64, 4 lanes).
#[inline]
pub fn accumulate_row_simd_f64(x: &[f64], y: &[f64], x_current: f64, bandwidth: f64) -> (f64, f64) {
    let xi = f64x4::splat(x_current);
    let bw = f64x4::splat(bandwidth);
    let neg_half = f64x4::splat(-0.5);

    let mut s_w = f64x4::splat(0.0);
    let mut s_wy = f64x4::splat(0.0);

    let x_chunks = x.chunks_exact(4);
    let y_chunks = y.chunks_exact(4);
    let x_tail = x_chunks.remainder();
    let y_tail = y_chunks.remainder();

    for (xc, yc) in x_chunks.zip(y_chunks) {
        let xv = f64x4::new([xc[0], xc[1], xc[2], xc[3]]);
        let yv = f64x4::new([yc[0], yc[1], yc[2], yc[3]]);

        let u = (xv - xi) / bw;
        let w = (neg_half * u * u).exp();

        s_w += w;
        s_wy += w * yv;
    }

    let (tail_w, tail_wy) = accumulate_row_scalar(x_tail, y_tail, x_current, bandwidth);

    (s_w.reduce_add() + tail_w, s_wy.reduce_add() + tail_wy)
}

/// SIMD accumulation of `(sum_w, sum_wy)` for one row (f32, 8 lanes).
#[inline]
pub fn accumulate_row_simd_f32(x: &[f32], y: &[f32], x_current: f32, bandwidth: f32) -> (f32, f32) {
    let xi = f32x8::splat(x_current);
    let bw = f32x8::splat(bandwidth);
    let neg_half = f32x8::splat(-0.5);

    let mut s_w = f32x8::splat(0.0);
    let mut s_wy = f32x8::splat(0.0);

    let x_chunks = x.chunks_exact(8);
    let y_chunks = y.chunks_exact(8);
    let x_tail = x_chunks.remainder();
    let y_tail = y_chunks.remainder();

    for (xc, yc) in x_chunks.zip(y_chunks) {
        let xv = f32x8::new([xc[0], xc[1], xc[2], xc[3], xc[4], xc[5], xc[6], xc[7]]);
        let yv = f32x8::new([yc[0], yc[1], yc[2], yc[3], yc[4], yc[5], yc[6], yc[7]]);

        let u = (xv - xi) / bw;
        let w = (neg_half * u * u).exp();

        s_w += w;
        s_wy += w * yv;
    }

    let (tail_w, tail_wy) = accumulate_row_scalar(x_tail, y_tail, x_current, bandwidth);

    (s_w.reduce_add() + tail_w, s_wy.reduce_add() + tail_wy)
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Type-specific row accumulation.
///
/// The scalar path is always available; `f64` and `f32` override the SIMD
/// path with `wide` vectors. Other float types fall back to scalar.
pub trait KernelSolver: Float {
    /// Accumulate `(sum_w, sum_wy)` with the fastest available kernel.
    #[inline]
    fn accumulate_row_simd(x: &[Self], y: &[Self], x_current: Self, bandwidth: Self) -> (Self, Self) {
        accumulate_row_scalar(x, y, x_current, bandwidth)
    }

    /// Accumulate `(sum_w, sum_wy)` with the requested kernel mode.
    #[inline]
    fn accumulate_row(
        x: &[Self],
        y: &[Self],
        x_current: Self,
        bandwidth: Self,
        mode: KernelMode,
    ) -> (Self, Self) {
        match mode {
            KernelMode::Scalar => accumulate_row_scalar(x, y, x_current, bandwidth),
            KernelMode::Simd => Self::accumulate_row_simd(x, y, x_current, bandwidth),
        }
    }
}

impl KernelSolver for f64 {
    #[inline]
    fn accumulate_row_simd(x: &[f64], y: &[f64], x_current: f64, bandwidth: f64) -> (f64, f64) {
        accumulate_row_simd_f64(x, y, x_current, bandwidth)
    }
}

impl KernelSolver for f32 {
    #[inline]
    fn accumulate_row_simd(x: &[f32], y: &[f32], x_current: f32, bandwidth: f32) -> (f32, f32) {
        accumulate_row_simd_f32(x, y, x_current, bandwidth)
    }
}

// ============================================================================
// Row Fit
// ============================================================================

/// Smoothed value at `x_current`.
///
/// `x_current` must be one of the sample points so that the self weight keeps
/// the denominator at one or above.
#[inline]
pub fn fit_row<T: KernelSolver>(x: &[T], y: &[T], x_current: T, bandwidth: T, mode: KernelMode) -> T {
    let (sum_w, sum_wy) = T::accumulate_row(x, y, x_current, bandwidth, mode);
    sum_wy / sum_w
}

// ============================================================================
// Sequential Passes
// ============================================================================

/// Sequential pass honoring `options.kernel_mode`.
pub fn smooth_pass_sequential<T: KernelSolver>(
    x: &[T],
    y: &[T],
    bandwidth: T,
    options: PassOptions,
    out: &mut [T],
) {
    smooth_rows(x, y, bandwidth, 0, out, options.kernel_mode);
}

/// Reference pass: scalar rows visited in index order.
pub fn smooth_pass_direct<T: KernelSolver>(x: &[T], y: &[T], bandwidth: T, out: &mut [T]) {
    smooth_rows(x, y, bandwidth, 0, out, KernelMode::Scalar);
}

/// SIMD pass: rows visited in index order, each reduced with `wide` lanes.
pub fn smooth_pass_simd<T: KernelSolver>(x: &[T], y: &[T], bandwidth: T, out: &mut [T]) {
    smooth_rows(x, y, bandwidth, 0, out, KernelMode::Simd);
}

/// Fill `out` with rows `offset .. offset + out.len()`.
///
/// This is the unit of work handed to threads by parallel passes.
#[inline]
pub fn smooth_rows<T: KernelSolver>(
    x: &[T],
    y: &[T],
    bandwidth: T,
    offset: usize,
    out: &mut [T],
    mode: KernelMode,
) {
    for (k, slot) in out.iter_mut().enumerate() {
        *slot = fit_row(x, y, x[offset + k], bandwidth, mode);
    }
}
