//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or interpreting route configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File extension does not map to a supported format.
    #[error("unsupported configuration file format: {path}")]
    UnsupportedFormat {
        /// Path to the file.
        path: PathBuf,
    },

    /// A route entry names an HTTP method the `http` crate rejects.
    #[error("invalid HTTP method {method:?} in route for '{controller}::{action}'")]
    InvalidMethod {
        /// The rejected method string.
        method: String,
        /// The controller identity from the route entry.
        controller: String,
        /// The handler name from the route entry.
        action: String,
    },

    /// A controller mount entry is malformed.
    #[error("invalid controller entry at index {index}: {reason}")]
    InvalidMount {
        /// Position in the `controllers` list.
        index: usize,
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a new file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Creates a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Creates a new invalid method error.
    pub fn invalid_method(
        method: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self::InvalidMethod {
            method: method.into(),
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Creates a new invalid mount entry error.
    pub fn invalid_mount(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidMount {
            index,
            reason: reason.into(),
        }
    }
}
