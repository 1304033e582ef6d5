//! Language source management for CLI

use std::path::PathBuf;

use sentsplit_core::{Result, RuleSegmenter};

/// Default built-in language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Source of the language resource backing segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language, by code or name
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl Default for LanguageSource {
    fn default() -> Self {
        LanguageSource::BuiltIn(DEFAULT_LANGUAGE.to_string())
    }
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(language) => format!("Built-in: {language}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the segmenter for this source
    pub fn load(&self) -> Result<RuleSegmenter> {
        match self {
            LanguageSource::BuiltIn(language) => RuleSegmenter::for_language(language),
            LanguageSource::External(path) => RuleSegmenter::from_config_file(path),
        }
    }
}
