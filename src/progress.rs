use indicatif::{ProgressBar, ProgressStyle};
use pof_core::progress::{Progress, ProgressSink};

const TEMPLATE: &str = "{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed}";

/// Shows the resolution progress on the terminal.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    pub fn new() -> Self {
        // The length is not known before the records are loaded.
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressSink for ProgressBarSink {
    fn progress(&mut self, p: Progress) {
        self.bar.set_length(p.total as u64);
        self.bar.set_position(p.current as u64);
        if p.current == p.total {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressBarSink {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
