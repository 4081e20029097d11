//! Cache storage implementation.
//!
//! The store maintains a single "current" cached archive plus at most one
//! "previous" backup, with controlled promotion and rollback. Mutations are
//! assumed single-process; there is no cross-process locking.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::remote::ArchiveFetcher;
use crate::ui::{Confirmer, DownloadObserver};

use super::{ARCHIVE_FILE, BACKUP_FILE};

/// In-flight download target inside the cache directory. Never treated as a
/// valid archive; renamed into the current slot only on full success.
const PARTIAL_FILE: &str = "templates.zip.part";

/// Observable state of the cache directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No archive present (directory may not exist).
    Empty,
    /// Current archive only.
    HasCurrent,
    /// Current archive plus one backup generation.
    HasCurrentAndBackup,
    /// Backup only. Reachable by external interference, not by any
    /// operation of this store.
    HasBackupOnly,
}

/// Result of a rollback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackOutcome {
    /// Backup was promoted to current.
    RolledBack,
    /// No backup existed; nothing to do.
    NoBackup,
    /// User declined the confirmation; nothing changed.
    Declined,
}

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Cache directory was removed.
    Reset,
    /// No current archive existed; nothing to do.
    NothingToReset,
    /// User declined the confirmation; nothing changed.
    Declined,
}

/// Storage for the cached template archive.
pub struct CacheStore {
    /// Root directory for the cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the current archive.
    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE)
    }

    /// Path of the backup archive.
    pub fn backup_path(&self) -> PathBuf {
        self.root.join(BACKUP_FILE)
    }

    fn partial_path(&self) -> PathBuf {
        self.root.join(PARTIAL_FILE)
    }

    /// Check whether a current archive exists.
    pub fn has_current(&self) -> bool {
        self.archive_path().is_file()
    }

    /// Check whether a backup archive exists.
    pub fn has_backup(&self) -> bool {
        self.backup_path().is_file()
    }

    /// Observe the current cache state.
    pub fn state(&self) -> CacheState {
        match (self.has_current(), self.has_backup()) {
            (false, false) => CacheState::Empty,
            (true, false) => CacheState::HasCurrent,
            (true, true) => CacheState::HasCurrentAndBackup,
            (false, true) => CacheState::HasBackupOnly,
        }
    }

    /// Refresh the cache from the remote archive.
    ///
    /// The download is streamed to a partial file first; only after it
    /// completes is the previous current archive relegated to the backup
    /// slot (discarding any older backup) and the partial file renamed into
    /// the current slot. A transport failure therefore leaves the pre-sync
    /// cache fully intact.
    pub fn sync(
        &self,
        fetcher: &ArchiveFetcher,
        observer: &mut dyn DownloadObserver,
    ) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;

        let partial = self.partial_path();
        if let Err(e) = fetcher.download(&partial, observer) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }

        let current = self.archive_path();
        let backup = self.backup_path();

        // Only one generation of history is retained.
        if current.is_file() {
            if backup.is_file() {
                tracing::debug!(path = %backup.display(), "discarding previous backup");
                fs::remove_file(&backup)?;
            }
            tracing::debug!(from = %current.display(), to = %backup.display(), "relegating current archive to backup");
            fs::rename(&current, &backup)?;
        }

        tracing::debug!(from = %partial.display(), to = %current.display(), "promoting downloaded archive");
        fs::rename(&partial, &current)?;

        Ok(())
    }

    /// Roll the cache back to the previous sync.
    ///
    /// A missing backup is a successful no-op. Otherwise the user must
    /// confirm; declining leaves the cache untouched and is reported as a
    /// distinct outcome. On confirmation the current archive (if any) is
    /// deleted and the backup renamed into its place.
    pub fn rollback(&self, confirmer: &mut dyn Confirmer) -> Result<RollbackOutcome> {
        if !self.has_backup() {
            return Ok(RollbackOutcome::NoBackup);
        }

        let confirmed = confirmer.confirm(
            "Roll back to the previous sync? The current one will be discarded",
            false,
        )?;
        if !confirmed {
            return Ok(RollbackOutcome::Declined);
        }

        let current = self.archive_path();
        if current.is_file() {
            tracing::debug!(path = %current.display(), "removing current archive");
            fs::remove_file(&current)?;
        }

        // Rename, not copy: promotion is a metadata operation.
        tracing::debug!(from = %self.backup_path().display(), to = %current.display(), "promoting backup");
        fs::rename(self.backup_path(), &current)?;

        Ok(RollbackOutcome::RolledBack)
    }

    /// Remove the entire cache directory.
    ///
    /// A cache with no current archive is a no-op. Otherwise the user must
    /// confirm; on confirmation the directory and everything in it
    /// (current, backup, partial leftovers) is deleted.
    pub fn reset(&self, confirmer: &mut dyn Confirmer) -> Result<ResetOutcome> {
        if !self.has_current() {
            return Ok(ResetOutcome::NothingToReset);
        }

        let confirmed = confirmer.confirm("Delete all synced templates and reset srcgen?", false)?;
        if !confirmed {
            return Ok(ResetOutcome::Declined);
        }

        tracing::debug!(path = %self.root.display(), "removing cache directory");
        fs::remove_dir_all(&self.root)?;

        Ok(ResetOutcome::Reset)
    }
}
