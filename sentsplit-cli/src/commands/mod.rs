//! CLI command implementations

pub mod languages;
pub mod split;

pub use split::SplitArgs;
