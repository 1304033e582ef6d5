//! Sentence splitting for line-delimited documents
//!
//! Reads one document per line and writes one sentence per line, with a
//! blank line after each document. Boundary detection is delegated to a
//! [`Segmenter`]; [`RuleSegmenter`] combines Unicode sentence boundaries with
//! a per-language abbreviation list.
//!
//! ```
//! use sentsplit_core::{RuleSegmenter, SentenceSplitter};
//!
//! let splitter = SentenceSplitter::new(RuleSegmenter::for_language("en").unwrap());
//! let mut output = Vec::new();
//! splitter.run("Hello world. How are you?\n".as_bytes(), &mut output).unwrap();
//! assert_eq!(output, b"Hello world.\nHow are you?\n\n");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod language;
pub mod pipeline;
pub mod segmenter;

pub use error::{Result, SplitError};
pub use language::{available_languages, LanguageConfig, LanguageRules};
pub use pipeline::{RunSummary, SentenceSplitter};
pub use segmenter::{RuleSegmenter, Segmenter, Sentences};
