//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `AnalysisError` to exit codes and user-facing messages.

use cablecheck_core::AnalysisError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Snapshot/argument error (unknown pin, malformed input).
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Anything else from the core.
    #[error("{0}")]
    Core(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,   // EX_IOERR
            CliError::Core(_) => 1,
        }
    }
}

impl From<AnalysisError> for CliError {
    fn from(err: AnalysisError) -> Self {
        match err {
            // Both validation errors indicate bad caller input; surface
            // them loudly as usage errors.
            AnalysisError::UnknownPin(_) | AnalysisError::InvalidSnapshot(_) => {
                CliError::Input(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(format!("JSON encoding failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cablecheck_core::UnknownPinError;

    #[test]
    fn test_unknown_pin_maps_to_usage_exit_code() {
        let err: CliError = AnalysisError::from(UnknownPinError("VCONN".into())).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("VCONN"));
    }

    #[test]
    fn test_io_error_maps_to_ex_ioerr() {
        let err: CliError = std::io::Error::other("disk gone").into();
        assert_eq!(err.exit_code(), 74);
    }
}
