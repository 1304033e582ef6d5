//! Configuration module
//!
//! Settings are layered: command-line flags and environment variables first,
//! then an optional TOML configuration file, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use crate::language_source::LanguageSource;

/// CLI configuration file structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Built-in language code or name
    pub language: Option<String>,

    /// External language resource, relative to the configuration file
    pub language_config: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Show a progress bar on terminals
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// A relative `language_config` is resolved against the file's directory.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config: CliConfig = toml::from_str(&content).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(language_config), Some(dir)) =
            (config.segmentation.language_config.as_mut(), path.parent())
        {
            if language_config.is_relative() {
                *language_config = dir.join(&*language_config);
            }
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Language resource to load
    pub language: LanguageSource,
    /// Whether to draw a progress bar
    pub progress: bool,
}

impl Settings {
    /// Combine command-line values with the configuration file
    ///
    /// An external language file wins over a built-in language at the same
    /// layer; any command-line value wins over the file.
    pub fn resolve(
        cli_language: Option<&str>,
        cli_language_config: Option<&Path>,
        quiet: bool,
        config: &CliConfig,
    ) -> Self {
        let language = if let Some(path) = cli_language_config {
            LanguageSource::External(path.to_path_buf())
        } else if let Some(language) = cli_language {
            LanguageSource::BuiltIn(language.to_string())
        } else if let Some(path) = &config.segmentation.language_config {
            LanguageSource::External(path.clone())
        } else if let Some(language) = &config.segmentation.language {
            LanguageSource::BuiltIn(language.clone())
        } else {
            LanguageSource::default()
        };

        Self {
            language,
            progress: !quiet && config.output.progress,
        }
    }
}
