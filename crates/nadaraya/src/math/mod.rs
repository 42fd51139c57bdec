//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure mathematical building blocks: the Gaussian kernel and the
//! range-based bandwidth rule. No smoothing logic lives here.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel weights.
pub mod kernel;

/// Bandwidth rules.
pub mod bandwidth;
