//! Language resources: TOML schema, runtime rules and the built-in registry

pub mod config;
pub mod registry;
pub mod rules;

pub use config::LanguageConfig;
pub use registry::{available_languages, get_rules};
pub use rules::LanguageRules;
