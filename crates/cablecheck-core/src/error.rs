//! Error types for snapshot validation and analysis.
//!
//! Both errors are raised at the validation boundary, before any
//! inference rule runs. Rule evaluation itself is total: every validated
//! snapshot produces a complete report.

use thiserror::Error;

/// A snapshot referenced a pin id that the registry does not define.
///
/// This indicates a caller bug (a registry/UI mismatch), not a
/// user-recoverable condition, and should be surfaced loudly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pin id `{0}`: not present in the pin registry")]
pub struct UnknownPinError(pub String);

/// A snapshot was structurally malformed (e.g. not a JSON object of
/// pin-id to boolean entries).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid snapshot: {reason}")]
pub struct InvalidSnapshotError {
    /// Human-readable description of the structural problem.
    pub reason: String,
}

impl InvalidSnapshotError {
    /// Build an error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Top-level error type returned by the inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Snapshot references a pin id absent from the registry.
    #[error(transparent)]
    UnknownPin(#[from] UnknownPinError),

    /// Snapshot is structurally malformed.
    #[error(transparent)]
    InvalidSnapshot(#[from] InvalidSnapshotError),
}
