//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Post-processing of smoothing results:
//! - Goodness-of-fit diagnostics
//! - Accuracy of one result relative to a reference result
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Relative accuracy against a reference result.
pub mod accuracy;
