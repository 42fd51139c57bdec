#![cfg(feature = "dev")]
//! Tests for the Gaussian kernel and bandwidth rules.
//!
//! ## Test Organization
//!
//! 1. **Kernel Values** - Self weight, known values, range
//! 2. **Kernel Symmetry** - w(i, j) == w(j, i)
//! 3. **Row Weights** - Filling a weight buffer
//! 4. **Bandwidth Rules** - Fixed and range-derived bandwidths

use approx::assert_relative_eq;

use nadaraya::internals::math::bandwidth::{data_range, range_bandwidth, Bandwidth};
use nadaraya::internals::math::kernel::GaussianKernel;

// ============================================================================
// Kernel Values Tests
// ============================================================================

/// The self weight is exactly one, the global maximum.
#[test]
fn test_gaussian_self_weight_is_one() {
    let k = GaussianKernel;
    assert_eq!(k.weight(0.0f64), 1.0);
    assert_eq!(k.weight(0.0f32), 1.0);
    assert_eq!(k.pair_weight(3.25f64, 3.25, 100.0), 1.0);
}

/// Known values of exp(-u^2 / 2).
#[test]
fn test_gaussian_known_values() {
    let k = GaussianKernel;
    assert_relative_eq!(k.weight(1.0f64), (-0.5f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(k.weight(2.0f64), (-2.0f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(k.weight(-3.0f64), (-4.5f64).exp(), epsilon = 1e-15);
    assert_eq!(k.name(), "Gaussian");
}

/// Weights lie in [0, 1] and decrease with distance.
#[test]
fn test_gaussian_range_and_monotonicity() {
    let k = GaussianKernel;
    let mut prev = k.weight(0.0f64);
    for i in 1..200 {
        let u = i as f64 * 0.1;
        let w = k.weight(u);
        assert!((0.0..=1.0).contains(&w));
        assert!(w <= prev, "weight must not increase with distance");
        prev = w;
    }
    // Far points underflow to zero rather than NaN
    assert_eq!(k.weight(1e6f64), 0.0);
}

/// A subnormal bandwidth keeps the self weight at one and zeroes the rest.
#[test]
fn test_subnormal_bandwidth_weights() {
    let k = GaussianKernel;
    assert_eq!(k.pair_weight(0.0f64, 0.0, 1e-310), 1.0);
    assert_eq!(k.pair_weight(1.0f64, 0.0, 1e-310), 0.0);
    assert_eq!(k.pair_weight(0.0f32, 0.0, 1e-39), 1.0);
    assert_eq!(k.pair_weight(1.0f32, 0.0, 1e-39), 0.0);
}

// ============================================================================
// Symmetry Tests
// ============================================================================

/// Pair weights are exactly symmetric.
#[test]
fn test_pair_weight_symmetry() {
    let k = GaussianKernel;
    let pts = [0.0f64, 0.1, 0.37, 1.5, -2.25, 10.0];
    let bw = 0.3;
    for &a in &pts {
        for &b in &pts {
            assert_eq!(k.pair_weight(a, b, bw), k.pair_weight(b, a, bw));
        }
    }
}

// ============================================================================
// Row Weights Tests
// ============================================================================

/// `weights_into` fills the buffer and returns the sum.
#[test]
fn test_weights_into_sum() {
    let k = GaussianKernel;
    let x = [0.0f64, 0.5, 1.0];
    let mut w = [0.0f64; 3];
    let sum = k.weights_into(&x, 0.5, 0.5, &mut w);

    assert_eq!(w[1], 1.0);
    assert_relative_eq!(w[0], (-0.5f64).exp(), epsilon = 1e-15);
    assert_eq!(w[0], w[2]);
    assert_relative_eq!(sum, w[0] + w[1] + w[2], epsilon = 1e-15);
}

/// Extra buffer slots are left untouched.
#[test]
fn test_weights_into_longer_buffer() {
    let k = GaussianKernel;
    let x = [0.0f64, 1.0];
    let mut w = [-1.0f64; 4];
    k.weights_into(&x, 0.0, 1.0, &mut w);
    assert_eq!(w[2], -1.0);
    assert_eq!(w[3], -1.0);
}

// ============================================================================
// Bandwidth Tests
// ============================================================================

/// Range-derived bandwidth is (max - min) / divisor.
#[test]
fn test_range_bandwidth() {
    let x = [0.3f64, 0.9, 0.1, 0.5];
    assert_relative_eq!(data_range(&x), 0.8, epsilon = 1e-15);
    assert_relative_eq!(range_bandwidth(&x, 100.0), 0.008, epsilon = 1e-15);
}

/// The default rule divides the range by 100.
#[test]
fn test_default_bandwidth_rule() {
    let x = [2.0f64, 4.0, 12.0];
    let bw = Bandwidth::<f64>::default().resolve(&x);
    assert_relative_eq!(bw, 0.1, epsilon = 1e-15);
    assert_eq!(Bandwidth::Fixed(0.25f64).resolve(&x), 0.25);
}

/// Constant or empty x derives a zero bandwidth.
#[test]
fn test_degenerate_range() {
    assert_eq!(data_range::<f64>(&[]), 0.0);
    assert_eq!(range_bandwidth(&[7.0f64, 7.0, 7.0], 100.0), 0.0);
}
