//! Configuration structures and validation
//!
//! This module defines the TOML schema for language resources.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Identity of the language
    pub metadata: Metadata,
    /// Known abbreviations; optional for languages without any
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short code used for lookup, e.g. `en`
    pub code: String,
    /// Human readable name, also accepted for lookup
    pub name: String,
}

/// Abbreviation configuration
///
/// Every key other than `case_sensitive` names a category of abbreviations,
/// written without their final dot (`"Dr"`, `"U.S"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Match abbreviations exactly instead of ignoring case
    #[serde(default)]
    pub case_sensitive: bool,
    /// Category name to abbreviation list
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl LanguageConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, String> {
        let config: LanguageConfig =
            toml::from_str(toml_str).map_err(|e| format!("invalid TOML: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| SplitError::model_unavailable(&name, format!("cannot read file: {e}")))?;
        Self::from_toml_str(&content).map_err(|reason| SplitError::model_unavailable(name, reason))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.metadata.name.trim().is_empty() {
            return Err("metadata.name must not be empty".to_string());
        }

        for (category, words) in &self.abbreviations.categories {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(format!("empty abbreviation in category '{category}'"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[metadata]
code = "xx"
name = "Test Language"

[abbreviations]
case_sensitive = true
titles = ["Dr", "Prof"]
geographic = ["U.S"]
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = LanguageConfig::from_toml_str(VALID).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.metadata.name, "Test Language");
        assert!(config.abbreviations.case_sensitive);
        assert_eq!(config.abbreviations.categories.len(), 2);
        assert_eq!(config.abbreviations.categories["titles"], vec!["Dr", "Prof"]);
    }

    #[test]
    fn test_abbreviations_table_is_optional() {
        let config = LanguageConfig::from_toml_str(
            r#"
[metadata]
code = "ja"
name = "Japanese"
"#,
        )
        .unwrap();
        assert!(config.abbreviations.categories.is_empty());
        assert!(!config.abbreviations.case_sensitive);
    }

    #[test]
    fn test_empty_code_rejected() {
        let err = LanguageConfig::from_toml_str(
            r#"
[metadata]
code = ""
name = "Test"
"#,
        )
        .unwrap_err();
        assert!(err.contains("metadata.code"));
    }

    #[test]
    fn test_empty_abbreviation_rejected() {
        let err = LanguageConfig::from_toml_str(
            r#"
[metadata]
code = "xx"
name = "Test"

[abbreviations]
titles = ["Dr", " "]
"#,
        )
        .unwrap_err();
        assert!(err.contains("titles"));
    }

    #[test]
    fn test_missing_metadata_rejected() {
        let err = LanguageConfig::from_toml_str("[abbreviations]\ntitles = [\"Dr\"]\n").unwrap_err();
        assert!(err.starts_with("invalid TOML"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{VALID}").unwrap();

        let config = LanguageConfig::from_file(file.path()).unwrap();
        assert_eq!(config.metadata.code, "xx");
    }

    #[test]
    fn test_from_missing_file_is_model_unavailable() {
        let err = LanguageConfig::from_file(Path::new("/nonexistent/lang.toml")).unwrap_err();
        assert!(matches!(err, SplitError::ModelUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/lang.toml"));
    }
}
