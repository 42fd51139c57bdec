//! Wall-clock timing of a single strategy invocation.

// External dependencies
use std::time::{Duration, Instant};

// Export dependencies from nadaraya crate
use nadaraya::internals::primitives::errors::NadarayaError;

/// Elapsed time and outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    /// Monotonic wall-clock time of the call.
    pub elapsed: Duration,

    /// Smoothed values, or the error the strategy returned.
    pub result: Result<Vec<T>, NadarayaError>,
}

impl<T> Measurement<T> {
    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether the strategy succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Time one call of `f` on `(x, y, bandwidth)`.
pub fn measure<T, F>(f: F, x: &[T], y: &[T], bandwidth: T) -> Measurement<T>
where
    F: FnOnce(&[T], &[T], T) -> Result<Vec<T>, NadarayaError>,
{
    let start = Instant::now();
    let result = f(x, y, bandwidth);
    let elapsed = start.elapsed();

    Measurement { elapsed, result }
}

/// Time one call of `f` and, when `verbose`, print `name:\t<seconds>`.
pub fn time_fn<T, F>(
    name: &str,
    f: F,
    x: &[T],
    y: &[T],
    bandwidth: T,
    verbose: bool,
) -> Measurement<T>
where
    F: FnOnce(&[T], &[T], T) -> Result<Vec<T>, NadarayaError>,
{
    let measurement = measure(f, x, y, bandwidth);
    if verbose {
        println!("{name}:\t{:.6}", measurement.elapsed_secs());
    }
    measurement
}
