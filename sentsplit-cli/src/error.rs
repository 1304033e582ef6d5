//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// CLI-specific errors; library errors pass through as [`sentsplit_core::SplitError`]
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    ConfigError {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError { path, message } => {
                write!(f, "Configuration error in {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
