//! Error types for gpg-check operations.
//!
//! This module defines [`CheckError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Usage` and `InvalidAcceptedVersion` are caller mistakes, reported
//!   before any tool is spawned
//! - `Execution` and `VersionParse` mean the environment is misconfigured
//! - An incompatible version is NOT an error; it is a normal
//!   [`CheckOutcome`](crate::probe::CheckOutcome)
//!
//! Every variant maps to exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gpg-check operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Missing or malformed command-line arguments.
    #[error("{message}")]
    Usage { message: String },

    /// The tool could not be spawned (not found, not executable, ...).
    #[error("Failed to run {}: {source}", tool.display())]
    Execution {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version banner does not carry a dotted `major.minor.micro` token.
    #[error("Could not parse version from {line:?}: {reason}")]
    VersionParse { line: String, reason: String },

    /// A caller-supplied accepted version is not `major.minor.micro`.
    #[error("Invalid accepted version '{spec}': {reason}")]
    InvalidAcceptedVersion { spec: String, reason: String },

    /// The banner has no `Pubkey:` line.
    #[error("Couldn't parse pubkey algorithms from the output of `{} --version`", tool.display())]
    PubkeyAlgorithmsMissing { tool: PathBuf },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckError {
    /// Shorthand for a [`CheckError::Usage`] error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

/// Result type alias for gpg-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
