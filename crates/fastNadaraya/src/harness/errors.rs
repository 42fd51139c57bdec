//! Error type for the benchmark harness.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::io;

// Export dependencies from nadaraya crate
use nadaraya::internals::primitives::errors::NadarayaError;

/// Errors raised while configuring or running a strategy comparison.
///
/// Failures of an individual strategy are not errors of the run; they are
/// recorded in the report.
#[derive(Debug)]
pub enum HarnessError {
    /// Sample generation or smoothing was rejected.
    Smoothing(NadarayaError),

    /// A strategy name was registered twice.
    DuplicateStrategy(String),

    /// An environment variable held an unusable value.
    InvalidConfig {
        /// Variable name.
        var: &'static str,
        /// Raw value as read.
        value: String,
    },

    /// Writing the report failed.
    Io(io::Error),

    /// Encoding the report failed.
    Serialize(serde_json::Error),
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            HarnessError::Smoothing(e) => write!(f, "Smoothing failed: {e}"),
            HarnessError::DuplicateStrategy(name) => {
                write!(f, "Strategy '{name}' is already registered")
            }
            HarnessError::InvalidConfig { var, value } => {
                write!(f, "Invalid value for {var}: '{value}'")
            }
            HarnessError::Io(e) => write!(f, "Report I/O failed: {e}"),
            HarnessError::Serialize(e) => write!(f, "Report encoding failed: {e}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessError::Smoothing(e) => Some(e),
            HarnessError::Io(e) => Some(e),
            HarnessError::Serialize(e) => Some(e),
            HarnessError::DuplicateStrategy(_) | HarnessError::InvalidConfig { .. } => None,
        }
    }
}

impl From<NadarayaError> for HarnessError {
    fn from(err: NadarayaError) -> Self {
        HarnessError::Smoothing(err)
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        HarnessError::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Serialize(err)
    }
}
