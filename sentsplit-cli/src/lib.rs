//! sentence_splitter CLI library
//!
//! This library provides the command-line interface for splitting
//! line-delimited documents into sentences.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod progress;

pub use error::{CliError, CliResult};
