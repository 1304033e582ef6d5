//! Line-oriented splitting pipeline
//!
//! Each input line is one document. Its sentences are written one per line,
//! and every document, the last one included, is followed by a single blank
//! line. Empty input produces empty output.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::segmenter::Segmenter;

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents (input lines) processed
    pub documents: usize,
    /// Sentences written
    pub sentences: usize,
}

/// Drives a [`Segmenter`] over line-delimited documents
#[derive(Debug, Clone)]
pub struct SentenceSplitter<S> {
    segmenter: S,
}

impl<S: Segmenter> SentenceSplitter<S> {
    /// Create a splitter around a segmenter
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// Sentences of one document, trimmed, with empty spans dropped
    pub fn split_document<'a>(&'a self, document: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.segmenter
            .segment(document)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
    }

    /// Write one document's sentence block followed by its blank separator line
    ///
    /// Returns the number of sentences written.
    pub fn write_document<W: Write>(&self, document: &str, writer: &mut W) -> Result<usize> {
        let mut count = 0;
        for sentence in self.split_document(document) {
            writeln!(writer, "{sentence}")?;
            count += 1;
        }
        writeln!(writer)?;
        Ok(count)
    }

    /// Split every line of `reader` into `writer`
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<RunSummary> {
        self.run_with(reader, writer, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_document` with the running
    /// document count after each document is written
    pub fn run_with<R, W, F>(
        &self,
        mut reader: R,
        mut writer: W,
        mut on_document: F,
    ) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        F: FnMut(usize),
    {
        let mut summary = RunSummary::default();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }

            let document = strip_line_terminator(&line);
            let sentences = self.write_document(document, &mut writer)?;
            log::trace!(
                "document {} -> {} sentence(s)",
                summary.documents + 1,
                sentences
            );

            summary.documents += 1;
            summary.sentences += sentences;
            on_document(summary.documents);
        }

        writer.flush()?;
        Ok(summary)
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
