//! Strategy comparison runs and their reports.
//!
//! ## Purpose
//!
//! [`Harness::run`] executes every registered strategy on one sample, in
//! registration order, and measures each result against the first
//! (reference) strategy with [`Accuracy`]. The resulting
//! [`BenchmarkReport`] prints as a table and serializes to JSON.
//!
//! ## Design notes
//!
//! * **Sequential across strategies**: Only one strategy runs at a time, so
//!   timings do not interfere with each other.
//! * **Failure isolation**: A strategy that returns an error or panics is
//!   recorded and the run goes on. If the reference fails, no entry carries
//!   an accuracy figure.
//! * **Diagnostic accuracy**: Accuracy is reported, never enforced.

// External dependencies
use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use serde::Serialize;
use tracing::{info, warn};

// Export dependencies from nadaraya crate
use nadaraya::internals::evaluation::accuracy::Accuracy;

// Internal dependencies
use crate::api::ParallelSolver;
use crate::harness::config::HarnessConfig;
use crate::harness::errors::HarnessError;
use crate::harness::registry::Registry;
use crate::harness::sample::{generate_sample, Sample};
use crate::harness::timing::time_fn;

// ============================================================================
// Report
// ============================================================================

/// Outcome of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry<T> {
    /// Strategy name.
    pub name: String,

    /// Wall-clock seconds of the call.
    pub elapsed_secs: f64,

    /// Mean accuracy percentage against the reference.
    ///
    /// `None` if the strategy or the reference failed, or if every reference
    /// element was zero.
    pub accuracy_percent: Option<f64>,

    /// Largest `|r - ref| / |ref|` over compared elements.
    pub max_relative_deviation: Option<T>,

    /// Elements skipped because the reference value was zero.
    pub skipped: usize,

    /// Error message if the strategy failed.
    pub error: Option<String>,
}

impl<T> ReportEntry<T> {
    fn success(name: &str, elapsed_secs: f64, accuracy: Option<Accuracy<T>>) -> Self {
        let (accuracy_percent, max_relative_deviation, skipped) = match accuracy {
            Some(acc) => (acc.mean_percent, Some(acc.max_relative_deviation), acc.skipped),
            None => (None, None, 0),
        };
        Self {
            name: name.to_string(),
            elapsed_secs,
            accuracy_percent,
            max_relative_deviation,
            skipped,
            error: None,
        }
    }

    fn failure(name: &str, elapsed_secs: f64, error: String) -> Self {
        Self {
            name: name.to_string(),
            elapsed_secs,
            accuracy_percent: None,
            max_relative_deviation: None,
            skipped: 0,
            error: Some(error),
        }
    }

    /// Whether the strategy failed.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Results of a comparison run, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport<T> {
    /// Sample size.
    pub samples: usize,

    /// Bandwidth shared by every strategy.
    pub bandwidth: T,

    /// Name of the reference strategy, if any was registered.
    pub reference: Option<String>,

    /// One entry per strategy.
    pub entries: Vec<ReportEntry<T>>,
}

impl<T: Serialize> BenchmarkReport<T> {
    /// Entry of the named strategy.
    pub fn get(&self, name: &str) -> Option<&ReportEntry<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries of strategies that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry<T>> {
        self.entries.iter().filter(|e| e.is_failure())
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), HarnessError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl<T: Float + Display> Display for BenchmarkReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.samples)?;
        writeln!(f, "  Bandwidth: {}", self.bandwidth)?;
        if let Some(reference) = &self.reference {
            writeln!(f, "  Reference: {reference}")?;
        }
        writeln!(f)?;
        writeln!(f, "{:<16} {:>12} {:>14}", "Strategy", "Seconds", "Accuracy %")?;
        writeln!(f, "{}", "-".repeat(44))?;

        for entry in &self.entries {
            match (&entry.error, entry.accuracy_percent) {
                (Some(err), _) => writeln!(
                    f,
                    "{:<16} {:>12.6}   FAILED: {err}",
                    entry.name, entry.elapsed_secs
                )?,
                (None, Some(acc)) => writeln!(
                    f,
                    "{:<16} {:>12.6} {:>14.6}",
                    entry.name, entry.elapsed_secs, acc
                )?,
                (None, None) => writeln!(
                    f,
                    "{:<16} {:>12.6} {:>14}",
                    entry.name, entry.elapsed_secs, "n/a"
                )?,
            }
        }

        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Runs registries of strategies under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create a harness.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Configuration of this harness.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every strategy of `registry` on `sample`.
    pub fn run<T>(&self, registry: &Registry<T>, sample: &Sample<T>) -> BenchmarkReport<T>
    where
        T: Float + Debug,
    {
        let mut reference: Option<Vec<T>> = None;
        let mut entries = Vec::with_capacity(registry.len());

        for (idx, (name, strategy)) in registry.iter().enumerate() {
            let start = Instant::now();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                time_fn(
                    name,
                    strategy,
                    &sample.x,
                    &sample.y,
                    sample.bandwidth,
                    self.config.verbose,
                )
            }));
            let (elapsed_secs, result) = match outcome {
                Ok(measurement) => (
                    measurement.elapsed_secs(),
                    measurement.result.map_err(|err| err.to_string()),
                ),
                Err(payload) => (
                    start.elapsed().as_secs_f64(),
                    Err(format!("panicked: {}", panic_message(&*payload))),
                ),
            };

            let entry = match result {
                Ok(values) => {
                    let baseline = if idx == 0 {
                        Some(values.as_slice())
                    } else {
                        reference.as_deref()
                    };
                    let accuracy = baseline
                        .map(|r| Accuracy::compare(&values, r))
                        .transpose();
                    let entry = match accuracy {
                        Ok(acc) => ReportEntry::success(name, elapsed_secs, acc),
                        Err(err) => ReportEntry::failure(name, elapsed_secs, err.to_string()),
                    };
                    if idx == 0 {
                        reference = Some(values);
                    }
                    entry
                }
                Err(err) => ReportEntry::failure(name, elapsed_secs, err),
            };

            match &entry.error {
                Some(err) => {
                    warn!(strategy = name, elapsed_secs, error = %err, "strategy failed");
                    if idx == 0 {
                        warn!("reference failed; accuracy figures are omitted");
                    }
                }
                None => info!(
                    strategy = name,
                    elapsed_secs,
                    accuracy = ?entry.accuracy_percent,
                    "strategy finished"
                ),
            }

            entries.push(entry);
        }

        BenchmarkReport {
            samples: sample.len(),
            bandwidth: sample.bandwidth,
            reference: registry.names().first().map(|name| name.to_string()),
            entries,
        }
    }

    /// Generate a sample, run the standard registry and write the JSON
    /// report if a path is configured.
    pub fn execute<T>(&self) -> Result<BenchmarkReport<T>, HarnessError>
    where
        T: ParallelSolver + SampleUniform + Serialize + Debug + 'static,
    {
        let sample = generate_sample::<T>(self.config.samples, self.config.seed)?;
        let registry = Registry::with_settings(self.config.workers, self.config.chunk_size);

        let report = self.run(&registry, &sample);

        if let Some(path) = &self.config.report_path {
            report.write_json(path)?;
            info!(path = %path.display(), "wrote report");
        }

        Ok(report)
    }
}

/// Text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}
