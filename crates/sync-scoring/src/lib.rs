// Modified: 2025-09-20

//! # sync-scoring
//!
//! Pure, total per-tool scoring and classification (spec.md §4.1). Every
//! function here is table-driven or prefix-matched against the rule
//! tables in spec.md §4.1 and never fails — an unrecognized tool or rule
//! shape always falls back to a conservative classification rather than
//! rejecting the finding, mirroring `gap-analysis::engine`'s
//! scorer/detector split into single-purpose, side-effect-free stages.

pub mod autofix;
pub mod effort;
pub mod input;
pub mod layer;
pub mod severity;

use sync_core::{AutofixLevel, Confidence, Effort, Layer, Severity};

pub use input::RawSignal;

/// The five normalized attributes scoring produces for one signal
/// (spec.md §2 step 1, §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredAttributes {
    pub severity: Severity,
    pub confidence: Confidence,
    pub effort: Effort,
    pub layer: Layer,
    pub autofix: AutofixLevel,
}

/// Classify a raw tool signal into its normalized attributes.
pub fn score(signal: &RawSignal) -> ScoredAttributes {
    let (severity, confidence) = severity::classify_severity(signal);
    ScoredAttributes {
        severity,
        confidence,
        effort: effort::classify_effort(signal),
        layer: layer::classify_layer(signal),
        autofix: autofix::classify_autofix(signal),
    }
}
