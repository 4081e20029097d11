//! Reset command implementation.
//!
//! `srcgen reset` deletes the cache directory after confirmation.

use std::path::{Path, PathBuf};

use crate::cache::{CacheStore, ResetOutcome};
use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::ui::{AutoConfirmer, Confirmer, Output};

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    cache_dir: PathBuf,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(cache_dir: &Path, args: ResetArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ResetCommand {
    fn execute(&self, out: &Output, confirmer: &mut dyn Confirmer) -> Result<CommandResult> {
        let store = CacheStore::new(&self.cache_dir);

        let outcome = if self.args.force {
            store.reset(&mut AutoConfirmer::new(true))?
        } else {
            store.reset(confirmer)?
        };

        match outcome {
            ResetOutcome::Reset => {
                out.success(&format!("Wiped \"{}\"", store.root().display()));
            }
            ResetOutcome::NothingToReset => {
                out.message("There is nothing to reset");
            }
            ResetOutcome::Declined => {
                out.message("Reset aborted");
            }
        }

        Ok(CommandResult::success())
    }
}
