//! Layered error types for the splitting pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading resources or splitting documents
#[derive(Error, Debug)]
pub enum SplitError {
    /// Input path does not exist or cannot be opened
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// The path that was requested
        path: PathBuf,
        /// The underlying open error
        #[source]
        source: std::io::Error,
    },

    /// The language resource backing segmentation cannot be loaded
    #[error("segmentation model '{name}' unavailable: {reason}")]
    ModelUnavailable {
        /// Language code, name or file the caller asked for
        name: String,
        /// Why loading failed
        reason: String,
    },

    /// Any other read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Shorthand for a [`SplitError::ModelUnavailable`]
    pub fn model_unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SplitError::ModelUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for splitting operations
pub type Result<T> = std::result::Result<T, SplitError>;
