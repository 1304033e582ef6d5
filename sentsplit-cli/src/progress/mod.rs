//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for document processing
///
/// Draws on stderr. The bar is redrawn on each completed document; there is
/// no background ticker.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// A reporter that draws nothing
    pub fn hidden() -> Self {
        Self { progress_bar: None }
    }

    /// A bar over `total` documents, or a spinner when the total is unknown
    pub fn documents(total: Option<u64>) -> Self {
        let pb = match total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::with_template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents ({per_sec})",
                ) {
                    pb.set_style(style.progress_chars("##-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::with_template("[{elapsed_precise}] {spinner} {pos} documents")
                {
                    pb.set_style(style);
                }
                pb
            }
        };

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Record the running count of finished documents
    pub fn documents_completed(&self, count: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(count as u64);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
