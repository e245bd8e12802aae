//! Error types for buildprep operations.
//!
//! This module defines [`BuildprepError`], the primary error type used
//! throughout the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BuildprepError` for the failure paths the step is designed to
//!   report (metadata write, env file append)
//! - Use `anyhow::Error` (via `BuildprepError::Other`) for unexpected errors
//! - Missing CI environment values are not errors; the run proceeds on
//!   empty identity values

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buildprep operations.
#[derive(Debug, Error)]
pub enum BuildprepError {
    /// Failed to write the build metadata file.
    #[error("Failed to write metadata file {path}: {source}")]
    MetadataWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to append to an environment file.
    #[error("Failed to append to env file {path}: {source}")]
    EnvFileAppend {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Variable name or value cannot be represented in the line-oriented
    /// runner env file.
    #[error("Cannot export '{name}': {message}")]
    InvalidExport { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for buildprep operations.
pub type Result<T> = std::result::Result<T, BuildprepError>;
