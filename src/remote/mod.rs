//! Remote archive fetching.
//!
//! This module downloads the remote template archive with a blocking,
//! streamed HTTP client. Bytes are consumed in bounded chunks and written
//! incrementally so large archives never sit fully in memory; progress is
//! reported to a [`DownloadObserver`].

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SrcgenError};
use crate::ui::DownloadObserver;

/// Default remote archive URL.
///
/// Point this at your own repository's release download URL to serve your
/// own template catalog.
pub const DEFAULT_REMOTE_URL: &str =
    "https://github.com/srcgen-dev/srcgen-templates/releases/latest/download/templates.zip";

/// Request timeout applied to archive downloads.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read buffer size for streamed downloads.
const CHUNK_SIZE: usize = 8 * 1024;

/// Streams the remote template archive to disk.
pub struct ArchiveFetcher {
    url: String,
    client: reqwest::blocking::Client,
}

impl ArchiveFetcher {
    /// Create a fetcher for the given archive URL.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// The archive URL this fetcher downloads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the archive into `dest`, reporting progress to `observer`.
    ///
    /// Returns the number of bytes written. On failure the partially written
    /// destination file is left for the caller to discard; cache consistency
    /// is handled by the cache store, which downloads to a partial path and
    /// renames into place only on success.
    pub fn download(&self, dest: &Path, observer: &mut dyn DownloadObserver) -> Result<u64> {
        tracing::debug!(url = %self.url, dest = %dest.display(), "downloading archive");

        let mut response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.transport_err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.transport_err(format!("HTTP {}", response.status())));
        }

        observer.start(response.content_length());

        let mut file = File::create(dest)?;
        let mut buf = [0u8; CHUNK_SIZE];
        let mut written: u64 = 0;

        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| self.transport_err(e.to_string()))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            written += n as u64;
            observer.advance(n as u64);
        }

        file.flush()?;
        observer.finish();

        tracing::debug!(bytes = written, "download complete");
        Ok(written)
    }

    fn transport_err(&self, message: String) -> SrcgenError {
        SrcgenError::Transport {
            url: self.url.clone(),
            message,
        }
    }
}
