//! Strategy comparison harness.
//!
//! Generates a synthetic sample, times each registered strategy on it and
//! reports accuracy relative to the first (reference) strategy.

// Harness error type
pub mod errors;

// Environment and programmatic configuration
pub mod config;

// Synthetic data
pub mod sample;

// Wall-clock measurement
pub mod timing;

// Named strategies
pub mod registry;

// Runs and reports
pub mod report;

pub use config::{HarnessConfig, Precision};
pub use errors::HarnessError;
pub use registry::{Registry, StrategyFn};
pub use report::{BenchmarkReport, Harness, ReportEntry};
pub use sample::{generate_sample, Sample, DEFAULT_SAMPLES};
pub use timing::{measure, time_fn, Measurement};
