//! Error types for the MiniApp report generator
//!
//! This module defines the error types for all components of the crate.
//! Manifest decode failures are surfaced to callers as typed errors, while
//! per-file report and descriptor failures are caught at the parse site and
//! turned into warnings.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest decoding errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// JSON did not match the manifest schema
    #[error("Manifest decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error reading manifest
    #[error("I/O error reading manifest {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Test corpus and implementation report errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// Test or report directory could not be listed
    #[error("Directory not accessible: {path}")]
    DirectoryNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A single descriptor or report file could not be read
    #[error("Unable to read {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },

    /// A single descriptor or report file could not be parsed
    #[error("Unable to parse {path}: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    /// Report output could not be written
    #[error("Failed to write report output to {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration file could not be read or written
    #[error("Failed to access configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be serialized
    #[error("Configuration serialization failed")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// User configuration directory could not be determined
    #[error("Could not determine user config directory")]
    NoConfigDir,
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Report pipeline error
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON output error
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Manifest(_) => "manifest",
            AppError::Report(_) => "report",
            AppError::Config(_) => "config",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Report result type alias
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
