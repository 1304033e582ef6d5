//! Split command implementation

use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sentsplit_core::SentenceSplitter;

use crate::config::{CliConfig, Settings};
use crate::input::InputSource;
use crate::progress::ProgressReporter;

/// Split documents into sentences.
///
/// The input has one document per line. The output has one sentence per
/// line, and every document is followed by an empty line.
#[derive(Debug, Parser)]
#[command(name = "sentence_splitter", version, about, long_about)]
pub struct SplitArgs {
    /// Input file, or '-' to read from stdin
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Built-in language for sentence detection rules (default: en)
    #[arg(short, long, value_name = "CODE", env = "SENTENCE_SPLITTER_LANGUAGE")]
    pub language: Option<String>,

    /// External language configuration file (takes precedence over --language)
    #[arg(short = 'L', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SENTENCE_SPLITTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// List built-in languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        if self.list_languages {
            return super::languages::list_languages(io::stdout().lock());
        }

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = Settings::resolve(
            self.language.as_deref(),
            self.language_config.as_deref(),
            self.quiet,
            &config,
        );

        let source = InputSource::from_arg(self.input.as_deref());
        let reader = source.open()?;

        // Counting re-reads the file, so only do it when a bar will be drawn
        let progress = if settings.progress && io::stderr().is_terminal() {
            ProgressReporter::documents(source.count_documents()?)
        } else {
            ProgressReporter::hidden()
        };

        log::info!("Loading language rules ({})", settings.language.display_name());
        let segmenter = settings.language.load()?;
        log::debug!(
            "Using {} rules (code: {})",
            segmenter.rules().name(),
            segmenter.rules().code()
        );
        let splitter = SentenceSplitter::new(segmenter);

        log::info!("Splitting documents from {}", source.display_name());
        let writer = BufWriter::new(io::stdout().lock());
        let result = splitter.run_with(reader, writer, |count| {
            progress.documents_completed(count)
        });
        progress.finish();
        let summary = result?;

        log::info!(
            "Processed {} document(s), {} sentence(s)",
            summary.documents,
            summary.sentences
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running several commands in-process
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}
