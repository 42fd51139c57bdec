//! Time every built-in strategy on one synthetic sample.
//!
//! Configuration is read from `NADARAYA_*` environment variables; log
//! verbosity from `RUST_LOG` (default `warn`).

use std::fmt::{Debug, Display};
use std::process::ExitCode;

use rand::distr::uniform::SampleUniform;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fastNadaraya::harness::{Harness, HarnessConfig, HarnessError, Precision};
use fastNadaraya::prelude::ParallelSolver;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report<T>(harness: &Harness) -> Result<(), HarnessError>
where
    T: ParallelSolver + SampleUniform + Serialize + Debug + Display + 'static,
{
    let report = harness.execute::<T>()?;
    println!();
    println!("{report}");
    Ok(())
}

fn run() -> Result<(), HarnessError> {
    let harness = Harness::new(HarnessConfig::from_env()?);
    tracing::debug!(config = ?harness.config(), "starting comparison");

    match harness.config().precision {
        Precision::F32 => report::<f32>(&harness),
        Precision::F64 => report::<f64>(&harness),
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
