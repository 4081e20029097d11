//! Sync command implementation.
//!
//! `srcgen sync` refreshes the local cache from the remote archive;
//! `srcgen sync --rollback` reverts to the previous sync.

use std::path::{Path, PathBuf};

use crate::cache::{CacheStore, RollbackOutcome};
use crate::cli::args::SyncArgs;
use crate::error::Result;
use crate::remote::{ArchiveFetcher, REQUEST_TIMEOUT};
use crate::ui::{download_observer, AutoConfirmer, Confirmer, Output};

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    cache_dir: PathBuf,
    remote_url: String,
    args: SyncArgs,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(cache_dir: &Path, remote_url: &str, args: SyncArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            remote_url: remote_url.to_string(),
            args,
        }
    }
}

impl Command for SyncCommand {
    fn execute(&self, out: &Output, confirmer: &mut dyn Confirmer) -> Result<CommandResult> {
        let store = CacheStore::new(&self.cache_dir);

        if self.args.rollback {
            let outcome = if self.args.yes {
                store.rollback(&mut AutoConfirmer::new(true))?
            } else {
                store.rollback(confirmer)?
            };

            match outcome {
                RollbackOutcome::RolledBack => {
                    out.success("Rolled back to the previous sync");
                }
                RollbackOutcome::NoBackup => {
                    out.message("There is no previous sync to roll back to");
                }
                RollbackOutcome::Declined => {
                    out.message("Rollback aborted");
                }
            }
            return Ok(CommandResult::success());
        }

        let fetcher = ArchiveFetcher::new(&self.remote_url, REQUEST_TIMEOUT);
        let mut observer = download_observer(out.mode(), "Syncing templates from remote");
        store.sync(&fetcher, observer.as_mut())?;

        out.success("Finished syncing templates from remote to local");
        Ok(CommandResult::success())
    }
}
