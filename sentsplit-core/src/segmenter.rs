//! Sentence segmentation capability
//!
//! [`Segmenter`] is the seam between the line pipeline and whatever detects
//! sentence boundaries. [`RuleSegmenter`] is the production implementation:
//! Unicode sentence boundaries (UAX #29) with abbreviation suppression from a
//! language resource.

use std::path::Path;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::language::{get_rules, LanguageConfig, LanguageRules};

/// Ordered, single-pass sequence of sentence spans borrowed from a document
pub type Sentences<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Splits a document into sentences
pub trait Segmenter {
    /// Segment `document`, yielding spans in document order
    ///
    /// Spans may carry surrounding whitespace; callers trim.
    fn segment<'a>(&'a self, document: &'a str) -> Sentences<'a>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment<'a>(&'a self, document: &'a str) -> Sentences<'a> {
        (**self).segment(document)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment<'a>(&'a self, document: &'a str) -> Sentences<'a> {
        (**self).segment(document)
    }
}

/// UAX #29 segmentation refined by a language's abbreviation list
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    rules: Arc<LanguageRules>,
}

impl RuleSegmenter {
    /// Create a segmenter from already loaded rules
    pub fn new(rules: Arc<LanguageRules>) -> Self {
        Self { rules }
    }

    /// Create a segmenter for a built-in language (`en`, `german`, ...)
    pub fn for_language(language: &str) -> Result<Self> {
        Ok(Self::new(get_rules(language)?))
    }

    /// Create a segmenter from an external language resource file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = LanguageConfig::from_file(path)?;
        Ok(Self::new(Arc::new(LanguageRules::from_config(&config))))
    }

    /// The active language rules
    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }
}

impl Segmenter for RuleSegmenter {
    fn segment<'a>(&'a self, document: &'a str) -> Sentences<'a> {
        Box::new(MergeAbbreviations {
            document,
            bounds: document.split_sentence_bound_indices(),
            rules: &self.rules,
        })
    }
}

/// Joins a boundary span with its successor while the span ends in an abbreviation
struct MergeAbbreviations<'a, I> {
    document: &'a str,
    bounds: I,
    rules: &'a LanguageRules,
}

impl<'a, I> Iterator for MergeAbbreviations<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, first) = self.bounds.next()?;
        let mut end = start + first.len();

        while ends_with_abbreviation(&self.document[start..end], self.rules) {
            match self.bounds.next() {
                Some((offset, piece)) => end = offset + piece.len(),
                None => break,
            }
        }

        Some(&self.document[start..end])
    }
}

fn ends_with_abbreviation(span: &str, rules: &LanguageRules) -> bool {
    let Some(body) = span.trim_end().strip_suffix('.') else {
        return false;
    };
    let word = body.rsplit(char::is_whitespace).next().unwrap_or(body);
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    rules.is_abbreviation(word)
}
