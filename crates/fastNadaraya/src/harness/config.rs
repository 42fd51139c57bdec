//! Run configuration for the comparison harness.
//!
//! Configuration comes from `NADARAYA_*` environment variables or from the
//! builder-style setters. Unset variables keep their defaults.
//!
//! | Variable             | Meaning                          | Default |
//! |----------------------|----------------------------------|---------|
//! | `NADARAYA_SAMPLES`   | sample size                      | 60000   |
//! | `NADARAYA_SEED`      | RNG seed                         | entropy |
//! | `NADARAYA_PRECISION` | `f32` or `f64`                   | `f64`   |
//! | `NADARAYA_REPORT`    | path of the JSON report          | none    |
//! | `NADARAYA_VERBOSE`   | per-strategy lines (`0` or `1`)  | `1`     |
//! | `NADARAYA_WORKERS`   | `pool` worker threads            | 4       |
//! | `NADARAYA_CHUNK`     | `chunked` rows per block         | 1000    |

// External dependencies
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Internal dependencies
use crate::engine::executor::{DEFAULT_CHUNK_SIZE, DEFAULT_WORKERS};
use crate::harness::errors::HarnessError;
use crate::harness::sample::DEFAULT_SAMPLES;

pub const ENV_SAMPLES: &str = "NADARAYA_SAMPLES";
pub const ENV_SEED: &str = "NADARAYA_SEED";
pub const ENV_PRECISION: &str = "NADARAYA_PRECISION";
pub const ENV_REPORT: &str = "NADARAYA_REPORT";
pub const ENV_VERBOSE: &str = "NADARAYA_VERBOSE";
pub const ENV_WORKERS: &str = "NADARAYA_WORKERS";
pub const ENV_CHUNK: &str = "NADARAYA_CHUNK";

/// Floating-point type of the generated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Single precision.
    F32,

    /// Double precision.
    #[default]
    F64,
}

impl FromStr for Precision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "float32" => Ok(Precision::F32),
            "f64" | "float64" => Ok(Precision::F64),
            _ => Err(()),
        }
    }
}

/// Settings of one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Number of observations.
    pub samples: usize,

    /// Seed of the sample generator; `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Sample precision.
    pub precision: Precision,

    /// Where to write the JSON report.
    pub report_path: Option<PathBuf>,

    /// Print `name:\t<seconds>` as each strategy finishes.
    pub verbose: bool,

    /// Worker threads of the `pool` strategy.
    pub workers: usize,

    /// Rows per block of the `chunked` strategy.
    pub chunk_size: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
            precision: Precision::default(),
            report_path: None,
            verbose: true,
            workers: DEFAULT_WORKERS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl HarnessConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(samples) = parse_var(&lookup, ENV_SAMPLES)? {
            config.samples = samples;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;
        if let Some(precision) = parse_var(&lookup, ENV_PRECISION)? {
            config.precision = precision;
        }
        config.report_path = lookup(ENV_REPORT)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        if let Some(verbose) = lookup(ENV_VERBOSE) {
            config.verbose = parse_flag(ENV_VERBOSE, &verbose)?;
        }
        if let Some(workers) = parse_var(&lookup, ENV_WORKERS)? {
            config.workers = workers;
        }
        if let Some(chunk_size) = parse_var(&lookup, ENV_CHUNK)? {
            config.chunk_size = chunk_size;
        }

        Ok(config)
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the sample size.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Seed the sample generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the sample precision.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Write the JSON report to `path`.
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Enable or disable per-strategy console lines.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the worker threads of the `pool` strategy.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the rows per block of the `chunked` strategy.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

fn parse_var<F, V>(lookup: &F, var: &'static str) -> Result<Option<V>, HarnessError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<V>()
            .map(Some)
            .map_err(|_| HarnessError::InvalidConfig { var, value }),
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, HarnessError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HarnessError::InvalidConfig {
            var,
            value: value.to_string(),
        }),
    }
}
