//! Download progress reporting.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::{DownloadObserver, OutputMode};

/// Pick a download observer appropriate for the output mode.
pub fn download_observer(mode: OutputMode, message: &str) -> Box<dyn DownloadObserver> {
    if mode.shows_progress() {
        Box::new(DownloadProgressBar::new(message))
    } else {
        Box::new(NoopObserver)
    }
}

/// Byte-based progress bar for archive downloads.
///
/// Shows a bounded bar when the server reports a content length and a
/// spinner with a running byte count otherwise.
pub struct DownloadProgressBar {
    message: String,
    bar: Option<ProgressBar>,
}

impl DownloadProgressBar {
    /// Create a progress bar with a message shown next to it.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            bar: None,
        }
    }
}

impl DownloadObserver for DownloadProgressBar {
    fn start(&mut self, total_bytes: Option<u64>) {
        let bar = match total_bytes {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes}")
                        .unwrap()
                        .progress_chars("=> "),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                        .template("{spinner:.magenta} {msg} {bytes}")
                        .unwrap(),
                );
                bar.enable_steady_tick(Duration::from_millis(80));
                bar
            }
        };
        bar.set_message(self.message.clone());
        self.bar = Some(bar);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Observer that ignores all progress events (quiet mode).
#[derive(Debug, Default)]
pub struct NoopObserver;

impl DownloadObserver for NoopObserver {
    fn start(&mut self, _total_bytes: Option<u64>) {}
    fn advance(&mut self, _bytes: u64) {}
    fn finish(&mut self) {}
}
