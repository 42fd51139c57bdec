//! Row-kernel selection.
//!
//! ## Purpose
//!
//! Every output element is a reduction over all `n` inputs. This module names
//! the two ways the core crate performs that reduction: a plain scalar loop or
//! a SIMD loop. Extension crates decide how rows are distributed across
//! threads; this flag only decides how a single row is reduced.
//!
//! ## Invariants
//!
//! * The default mode is always `Scalar`, which is the reference computation.

/// How a single output row is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelMode {
    /// Sequential scalar accumulation (bitwise reproducible reference).
    #[default]
    Scalar,

    /// Lane-parallel accumulation through `wide` vectors (f32/f64 only;
    /// other float types fall back to scalar).
    Simd,
}

impl KernelMode {
    /// Short name used in result summaries.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelMode::Scalar => "direct",
            KernelMode::Simd => "simd",
        }
    }
}
