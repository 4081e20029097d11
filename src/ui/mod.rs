//! Terminal user interface components.
//!
//! This module provides:
//! - [`Confirmer`] trait for yes/no confirmation prompts
//! - [`DownloadObserver`] trait for download progress reporting
//! - [`Output`] for mode-aware status printing
//! - Mock implementations for testing
//!
//! Destructive cache operations take a `&mut dyn Confirmer` rather than
//! reading the console directly, so tests can supply deterministic answers.

pub mod confirm;
pub mod mock;
pub mod output;
pub mod progress;

pub use confirm::{AutoConfirmer, TerminalConfirmer};
pub use mock::{MockConfirmer, RecordingObserver};
pub use output::{Output, OutputMode};
pub use progress::{download_observer, DownloadProgressBar, NoopObserver};

use crate::error::Result;

/// Trait for yes/no confirmation prompts.
///
/// An empty answer resolves to the supplied default; interactive
/// implementations block until the user answers.
pub trait Confirmer {
    /// Ask the user a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Trait for observing a streamed download.
///
/// The fetcher calls `start` once (with the content length when the server
/// reports one), `advance` per chunk written, and `finish` on completion.
pub trait DownloadObserver {
    /// Begin observing a download of `total_bytes` (if known).
    fn start(&mut self, total_bytes: Option<u64>);

    /// Record `bytes` more bytes written.
    fn advance(&mut self, bytes: u64);

    /// Mark the download as complete.
    fn finish(&mut self);
}
