//! Accuracy of one smoothing result relative to a reference result.
//!
//! ## Purpose
//!
//! Strategies that reorder floating-point sums (SIMD lanes, thread splits,
//! single precision) drift slightly from the reference computation. This
//! module quantifies that drift:
//!
//! * **Percentage accuracy** per element:
//!   `100 - 100 * (result[i] - reference[i]) / reference[i]`, averaged.
//! * **Maximum relative deviation**: `max |result[i] - reference[i]| / |reference[i]|`.
//!
//! ## Design notes
//!
//! * **Diagnostic only**: An accuracy away from 100% is reported, never
//!   treated as a failure.
//! * **Zero references**: Elements whose reference value is exactly zero have
//!   no defined relative error. They are skipped and counted in `skipped`.
//! * **Wide accumulation**: The percentage mean is summed in `f64` whatever
//!   `T` is, so single-precision drift survives averaging over large samples.
//!
//! ## Invariants
//!
//! * `compared + skipped == reference.len()`.
//! * `mean_percent` is `None` iff `compared == 0`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NadarayaError;

// ============================================================================
// Accuracy Report
// ============================================================================

/// Accuracy of a result against a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy<T> {
    /// Mean of `100 - 100 * (r - ref) / ref` over compared elements.
    pub mean_percent: Option<f64>,

    /// Largest `|r - ref| / |ref|` over compared elements.
    pub max_relative_deviation: T,

    /// Number of elements that entered the figures.
    pub compared: usize,

    /// Number of elements skipped because the reference was zero.
    pub skipped: usize,
}

impl<T: Float> Accuracy<T> {
    /// Compare `result` against `reference` element by element.
    pub fn compare(result: &[T], reference: &[T]) -> Result<Self, NadarayaError> {
        if result.len() != reference.len() {
            return Err(NadarayaError::MismatchedInputs {
                x_len: result.len(),
                y_len: reference.len(),
            });
        }

        let mut sum_pct = 0.0f64;
        let mut max_dev = T::zero();
        let mut compared = 0usize;
        let mut skipped = 0usize;

        for (&r, &reference_i) in result.iter().zip(reference.iter()) {
            if reference_i == T::zero() {
                skipped += 1;
                continue;
            }

            let r_wide = r.to_f64().unwrap_or(f64::NAN);
            let ref_wide = reference_i.to_f64().unwrap_or(f64::NAN);
            sum_pct += 100.0 - 100.0 * (r_wide - ref_wide) / ref_wide;

            // NaN results must not hide behind `max`
            let dev = ((r - reference_i) / reference_i).abs();
            if dev > max_dev || dev.is_nan() {
                max_dev = dev;
            }
            compared += 1;
        }

        let mean_percent = (compared > 0).then(|| sum_pct / compared as f64);

        Ok(Self {
            mean_percent,
            max_relative_deviation: max_dev,
            compared,
            skipped,
        })
    }

    /// Whether every compared element is within `tolerance` relative deviation.
    #[inline]
    pub fn agrees_within(&self, tolerance: T) -> bool {
        self.max_relative_deviation <= tolerance
    }
}
