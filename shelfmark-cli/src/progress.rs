//! Terminal progress reporting for catalog builds

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use shelfmark_core::ProgressSink;

/// Progress bar advanced once per top-level series
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(len: usize) -> Result<Self> {
        let bar = ProgressBar::new(len as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
                .progress_chars("##-"),
        );
        Ok(Self { bar })
    }

    /// Progress that is tracked but never drawn
    pub fn hidden(len: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(len as u64);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for BarProgress {
    fn show_message(&mut self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn advance(&mut self) {
        self.bar.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts() {
        let mut progress = BarProgress::hidden(3);
        progress.show_message("Series > Series starting with B");
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);
    }
}
