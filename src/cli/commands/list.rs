//! List command implementation.
//!
//! `srcgen list` prints the templates available in the cached archive,
//! syncing first when no archive has been fetched yet.

use std::path::{Path, PathBuf};

use crate::archive::TemplateCatalog;
use crate::cache::CacheStore;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::remote::{ArchiveFetcher, REQUEST_TIMEOUT};
use crate::ui::{download_observer, Confirmer, Output};

use super::dispatcher::{Command, CommandResult};

/// JSON payload for `list --json`.
#[derive(Debug, serde::Serialize)]
struct ListOutput {
    count: usize,
    templates: Vec<String>,
}

/// The list command implementation.
pub struct ListCommand {
    cache_dir: PathBuf,
    remote_url: String,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(cache_dir: &Path, remote_url: &str, args: ListArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            remote_url: remote_url.to_string(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &Output, _confirmer: &mut dyn Confirmer) -> Result<CommandResult> {
        let store = CacheStore::new(&self.cache_dir);
        let fetcher = ArchiveFetcher::new(&self.remote_url, REQUEST_TIMEOUT);
        let mut observer = download_observer(out.mode(), "Syncing templates from remote");

        let names = TemplateCatalog::new(&store).list(&fetcher, observer.as_mut())?;

        if self.args.json {
            let payload = ListOutput {
                count: names.len(),
                templates: names,
            };
            let json = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if names.is_empty() {
            out.message("No templates to list, a proper sync might be required");
            return Ok(CommandResult::success());
        }

        out.message(&format!("{} template(s) are locally available:", names.len()));
        for name in &names {
            out.message(&format!("  {}", name));
        }

        Ok(CommandResult::success())
    }
}
