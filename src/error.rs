//! Error types for composelint operations.
//!
//! This module defines [`ComposelintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ComposelintError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ComposelintError::Other`) for unexpected errors
//! - Lint violations are never errors: they travel as diagnostics, and a rule
//!   fault is isolated at the engine boundary rather than propagated here

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for composelint operations.
#[derive(Debug, Error)]
pub enum ComposelintError {
    /// Compose file not found at the given location.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// No compose files were discovered under the given paths.
    #[error("No compose files found under: {searched}")]
    NoFilesFound { searched: String },

    /// Failed to parse a compose file as YAML.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Failed to parse the linter settings file.
    #[error("Invalid settings at {path}: {message}")]
    SettingsError { path: PathBuf, message: String },

    /// Requested output format is not recognized.
    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for composelint operations.
pub type Result<T> = std::result::Result<T, ComposelintError>;
