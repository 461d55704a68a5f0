//! Error types for dataset loading.
//!
//! Formatting, tab selection and the sheet transform are total; the only
//! fallible boundary is reading the startup dataset from disk.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors produced while loading or validating a [`Dataset`](super::Dataset).
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset parsed but cannot drive the screen.
    #[error("Invalid dataset: {message}")]
    Invalid {
        /// Why the dataset was rejected.
        message: String,
    },
}

impl DataError {
    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error with the given message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
