//! Built-in language resources
//!
//! Resources are embedded at compile time and parsed once on first access.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::LanguageConfig;
use super::rules::LanguageRules;
use crate::error::{Result, SplitError};

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("de", include_str!("../../configs/languages/german.toml")),
    ("ja", include_str!("../../configs/languages/japanese.toml")),
];

struct Registry {
    /// Lookup by lowercase code and lowercase name
    by_key: HashMap<String, Arc<LanguageRules>>,
    /// `(code, name)` in declaration order
    listing: Vec<(String, String)>,
}

static EMBEDDED: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    EMBEDDED.get_or_init(|| {
        let mut by_key = HashMap::new();
        let mut listing = Vec::new();

        for (code, source) in EMBEDDED_SOURCES {
            match LanguageConfig::from_toml_str(source) {
                Ok(config) => {
                    let rules = Arc::new(LanguageRules::from_config(&config));
                    by_key.insert(rules.code().to_lowercase(), rules.clone());
                    by_key.insert(rules.name().to_lowercase(), rules.clone());
                    listing.push((rules.code().to_string(), rules.name().to_string()));
                }
                Err(e) => {
                    log::warn!("Failed to load embedded '{code}' config: {e}");
                }
            }
        }

        Registry { by_key, listing }
    })
}

/// Load built-in language rules by code or name (`en`, `English`)
pub fn get_rules(language: &str) -> Result<Arc<LanguageRules>> {
    registry()
        .by_key
        .get(&language.trim().to_lowercase())
        .cloned()
        .ok_or_else(|| SplitError::model_unavailable(language, "unknown language code"))
}

/// `(code, name)` pairs of every built-in language
pub fn available_languages() -> &'static [(String, String)] {
    &registry().listing
}
