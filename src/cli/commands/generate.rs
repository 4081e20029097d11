//! Generate command implementation.
//!
//! `srcgen generate <template>` extracts the chosen template into the
//! output directory (current directory by default).

use std::path::{Path, PathBuf};

use crate::archive::TemplateGenerator;
use crate::cache::CacheStore;
use crate::cli::args::GenerateArgs;
use crate::error::{Result, SrcgenError};
use crate::remote::{ArchiveFetcher, REQUEST_TIMEOUT};
use crate::ui::{download_observer, Confirmer, Output};

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    cache_dir: PathBuf,
    remote_url: String,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(cache_dir: &Path, remote_url: &str, args: GenerateArgs) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            remote_url: remote_url.to_string(),
            args,
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, out: &Output, _confirmer: &mut dyn Confirmer) -> Result<CommandResult> {
        let destination = match &self.args.output {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let store = CacheStore::new(&self.cache_dir);
        let fetcher = ArchiveFetcher::new(&self.remote_url, REQUEST_TIMEOUT);
        let mut observer = download_observer(out.mode(), "Syncing templates from remote");

        let generated = match TemplateGenerator::new(&store).generate(
            &self.args.template,
            &destination,
            &fetcher,
            observer.as_mut(),
        ) {
            Ok(generated) => generated,
            Err(SrcgenError::TemplateNotFound { name }) => {
                out.error(&format!("\"{}\" not found", name));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        out.success(&format!(
            "Generated {} file(s) in {:.2}s",
            generated.files_written,
            generated.elapsed.as_secs_f64()
        ));
        Ok(CommandResult::success())
    }
}
