//! Layer 5: Engine
//!
//! # Purpose
//!
//! Orchestrates a smoothing run: validation, bandwidth resolution, pass
//! selection, and the result type handed back to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
