//! Local archive cache.
//!
//! The cache directory holds the current template archive and at most one
//! backup generation. [`CacheStore`] owns the directory and provides the
//! sync / rollback / reset lifecycle.

pub mod store;

pub use store::{CacheState, CacheStore, ResetOutcome, RollbackOutcome};

/// File name of the current archive inside the cache directory.
pub const ARCHIVE_FILE: &str = "templates.zip";

/// File name of the backup archive inside the cache directory.
pub const BACKUP_FILE: &str = "templates.zip.old";

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("srcgen")
}
