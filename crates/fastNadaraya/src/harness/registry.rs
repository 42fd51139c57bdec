//! Ordered registry of named smoothing strategies.
//!
//! ## Purpose
//!
//! A comparison run visits strategies in registration order and measures
//! every one against the first. The registry is an explicit value built by
//! the caller; nothing is registered globally.
//!
//! ## Invariants
//!
//! * Names are unique.
//! * Iteration order equals registration order.

// External dependencies
use std::fmt::{Debug, Formatter, Result as FmtResult};

// Export dependencies from nadaraya crate
use nadaraya::internals::primitives::errors::NadarayaError;

// Internal dependencies
use crate::api::{smooth, Execution, KernelMode, ParallelNadarayaBuilder, ParallelSolver, SmoothResult};
use crate::engine::executor::{DEFAULT_CHUNK_SIZE, DEFAULT_WORKERS};
use crate::harness::errors::HarnessError;

/// A strategy: smooth `(x, y)` with the given bandwidth.
pub type StrategyFn<T> =
    Box<dyn Fn(&[T], &[T], T) -> Result<Vec<T>, NadarayaError> + Send + Sync>;

struct Entry<T> {
    name: String,
    run: StrategyFn<T>,
}

/// Named strategies in registration order.
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Registry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Registry")
            .field("strategies", &self.names())
            .finish()
    }
}

impl<T> Registry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a strategy. Fails if `name` is already registered.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), HarnessError>
    where
        F: Fn(&[T], &[T], T) -> Result<Vec<T>, NadarayaError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(HarnessError::DuplicateStrategy(name));
        }
        self.push(name, Box::new(f));
        Ok(())
    }

    fn push(&mut self, name: impl Into<String>, run: StrategyFn<T>) {
        self.entries.push(Entry {
            name: name.into(),
            run,
        });
    }

    /// Strategy names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no strategy is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&StrategyFn<T>> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.run)
    }

    /// Strategies with their names, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StrategyFn<T>)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.run))
    }
}

impl<T: ParallelSolver + 'static> Registry<T> {
    /// Every built-in strategy with default pool and block sizes.
    ///
    /// `direct` is registered first and serves as the reference.
    pub fn standard() -> Self {
        Self::with_settings(DEFAULT_WORKERS, DEFAULT_CHUNK_SIZE)
    }

    /// Every built-in strategy with the given pool and block sizes.
    pub fn with_settings(workers: usize, chunk_size: usize) -> Self {
        let mut registry = Self::new();
        registry.push("direct", Box::new(smooth::<T>));

        let strategies = [
            (Execution::Vectorized, KernelMode::Scalar),
            (Execution::Sequential, KernelMode::Simd),
            (Execution::Parallel, KernelMode::Scalar),
            (Execution::Parallel, KernelMode::Simd),
            (Execution::Chunked, KernelMode::Scalar),
            (Execution::Pool, KernelMode::Scalar),
        ];
        for (execution, mode) in strategies {
            registry.push(
                execution.strategy_name(mode),
                Box::new(execution_strategy(execution, mode, workers, chunk_size)),
            );
        }

        registry
    }
}

/// Wrap one execution of the parallel builder as a strategy.
fn execution_strategy<T: ParallelSolver + 'static>(
    execution: Execution,
    mode: KernelMode,
    workers: usize,
    chunk_size: usize,
) -> impl Fn(&[T], &[T], T) -> Result<Vec<T>, NadarayaError> + Send + Sync + 'static {
    move |x, y, bandwidth| {
        ParallelNadarayaBuilder::new()
            .bandwidth(bandwidth)
            .kernel_mode(mode)
            .execution(execution)
            .workers(workers)
            .chunk_size(chunk_size)
            .build()?
            .fit(x, y)
            .map(SmoothResult::into_smoothed)
    }
}
