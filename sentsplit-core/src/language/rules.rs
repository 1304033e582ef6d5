//! Runtime language rules built from a [`LanguageConfig`]

use std::collections::HashSet;

use super::config::LanguageConfig;

/// Abbreviation lookup for one language
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    abbreviations: HashSet<String>,
    /// Inner prefixes of multi-dot forms ("u.s" of "u.s.a"), dotted only
    dotted_prefixes: HashSet<String>,
    case_sensitive: bool,
}

impl LanguageRules {
    /// Build rules from a validated configuration
    pub fn from_config(config: &LanguageConfig) -> Self {
        let case_sensitive = config.abbreviations.case_sensitive;
        let mut abbreviations = HashSet::new();
        let mut dotted_prefixes = HashSet::new();

        for words in config.abbreviations.categories.values() {
            for word in words {
                let word = word.trim().trim_end_matches('.');
                let normalized = normalize(word, case_sensitive);

                // "U.S.A" also matches at "U.S", but never at a bare "U"
                let parts: Vec<&str> = normalized.split('.').collect();
                for i in 2..parts.len() {
                    dotted_prefixes.insert(parts[..i].join("."));
                }

                abbreviations.insert(normalized);
            }
        }

        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            abbreviations,
            dotted_prefixes,
            case_sensitive,
        }
    }

    /// Language code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `word` (without its final dot) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        if word.is_empty() || self.abbreviations.is_empty() {
            return false;
        }
        let word = normalize(word, self.case_sensitive);
        self.abbreviations.contains(&word) || self.dotted_prefixes.contains(&word)
    }
}

fn normalize(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}
