//! Template catalog.

use std::fs::File;

use zip::ZipArchive;

use crate::cache::CacheStore;
use crate::error::{Result, SrcgenError};
use crate::remote::ArchiveFetcher;
use crate::ui::DownloadObserver;

/// Enumerates the templates available in the cached archive.
pub struct TemplateCatalog<'a> {
    store: &'a CacheStore,
}

impl<'a> TemplateCatalog<'a> {
    /// Create a catalog over the given cache store.
    pub fn new(store: &'a CacheStore) -> Self {
        Self { store }
    }

    /// List available template names in archive entry order.
    ///
    /// When no current archive exists a sync is attempted first; if that
    /// sync fails the list is empty rather than an error, leaving the user
    /// free to retry once their connection is back. A template is any
    /// directory entry whose path, minus the trailing `/`, contains no
    /// further separator. Non-directory entries and nested directories are
    /// skipped.
    pub fn list(
        &self,
        fetcher: &ArchiveFetcher,
        observer: &mut dyn DownloadObserver,
    ) -> Result<Vec<String>> {
        if !self.store.has_current() {
            tracing::info!("no local archive, syncing first");
            if let Err(e) = self.store.sync(fetcher, observer) {
                tracing::warn!(error = %e, "implicit sync failed, listing no templates");
                return Ok(Vec::new());
            }
        }

        let path = self.store.archive_path();
        tracing::debug!(path = %path.display(), "scanning archive for templates");

        let file = File::open(&path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| SrcgenError::archive(&path, e))?;

        let mut names = Vec::new();
        for i in 0..archive.len() {
            // Raw access: the central directory is enough, no decompression
            let entry = archive
                .by_index_raw(i)
                .map_err(|e| SrcgenError::archive(&path, e))?;
            if !entry.is_dir() {
                continue;
            }

            let name = entry.name().trim_end_matches('/');
            if name.is_empty() || name.contains('/') {
                continue;
            }
            names.push(name.to_string());
        }

        Ok(names)
    }
}
