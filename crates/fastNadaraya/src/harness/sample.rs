//! Synthetic sample generation.
//!
//! ## Purpose
//!
//! Every strategy of a comparison run receives the same sample:
//!
//! ```text
//! x[i] ~ U[0, 1)
//! y[i] = 100 * x[i] + 100 + e[i],   e[i] ~ U[0, 1)
//! bw   = (max(x) - min(x)) / 100
//! ```
//!
//! ## Invariants
//!
//! * `x.len() == y.len() == n` and `n > 0`.
//! * The same seed always yields the same sample.

// External dependencies
use std::cmp::Ordering;

use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::prelude::*;
use rand_distr::Uniform;
use tracing::{debug, enabled, Level};

// Export dependencies from nadaraya crate
use nadaraya::internals::math::bandwidth::{data_range, range_bandwidth, DEFAULT_RANGE_DIVISOR};
use nadaraya::internals::primitives::errors::NadarayaError;

// Internal dependencies
use crate::harness::errors::HarnessError;

/// Default sample size of a comparison run.
pub const DEFAULT_SAMPLES: usize = 60_000;

/// Inputs shared by every strategy of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    /// Predictor values.
    pub x: Vec<T>,

    /// Response values, aligned with `x`.
    pub y: Vec<T>,

    /// Kernel bandwidth derived from the range of `x`.
    pub bandwidth: T,
}

impl<T: Float> Sample<T> {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the sample has no observations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Generate a sample of `n` observations.
///
/// With `seed` the sample is reproducible; without it the generator is seeded
/// from the operating system.
pub fn generate_sample<T>(n: usize, seed: Option<u64>) -> Result<Sample<T>, HarnessError>
where
    T: Float + SampleUniform,
{
    if n == 0 {
        return Err(NadarayaError::EmptyInput.into());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let unit = Uniform::new(T::zero(), T::one())
        .map_err(|e| NadarayaError::InvalidInput(e.to_string()))?;

    let slope = constant::<T>(100.0)?;
    let intercept = constant::<T>(100.0)?;

    let x: Vec<T> = (0..n).map(|_| unit.sample(&mut rng)).collect();
    let y: Vec<T> = x
        .iter()
        .map(|&xi| slope * xi + intercept + unit.sample(&mut rng))
        .collect();

    let divisor = constant::<T>(DEFAULT_RANGE_DIVISOR)?;
    let bandwidth = range_bandwidth(&x, divisor);

    debug!(
        n,
        seed = ?seed,
        range = data_range(&x).to_f64(),
        bandwidth = bandwidth.to_f64(),
        "generated sample"
    );

    if enabled!(Level::DEBUG) {
        let duplicates = count_duplicates(&x);
        if duplicates > 0 {
            debug!(duplicates, "sample has repeated x values");
        }
    }

    Ok(Sample { x, y, bandwidth })
}

fn constant<T: Float>(value: f64) -> Result<T, HarnessError> {
    T::from(value).ok_or_else(|| {
        NadarayaError::InvalidInput(format!("{value} is not representable in the sample type")).into()
    })
}

/// Number of values equal to their predecessor after sorting.
pub fn count_duplicates<T: Float>(x: &[T]) -> usize {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted.windows(2).filter(|w| w[0] == w[1]).count()
}
