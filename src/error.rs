//! Error types for hostcheck operations.
//!
//! This module defines [`HostcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration and report errors abort the run before or during checks
//! - Per-check configuration errors (`UnknownOperator`, `IncompleteCheck`)
//!   are reported against the check and counted as failures, the run goes on
//! - Use `anyhow::Error` (via `HostcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostcheck operations.
#[derive(Debug, Error)]
pub enum HostcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A check names an operator that is not recognized.
    #[error("Check '{check}' uses unknown operator '{operator}'")]
    UnknownOperator { check: String, operator: String },

    /// A check is missing a field needed to evaluate it.
    #[error("Check '{check}' is incomplete: {message}")]
    IncompleteCheck { check: String, message: String },

    /// The report file could not be rotated or appended to.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host OS has no configured check sequence.
    #[error("Unsupported platform: {os} (checks exist for Linux and Windows only)")]
    UnsupportedPlatform { os: String },

    /// Shell command could not be launched.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HostcheckError {
    /// Whether this error belongs to a single check rather than the run.
    pub fn is_check_error(&self) -> bool {
        matches!(
            self,
            HostcheckError::UnknownOperator { .. } | HostcheckError::IncompleteCheck { .. }
        )
    }
}

/// Result type alias for hostcheck operations.
pub type Result<T> = std::result::Result<T, HostcheckError>;
