//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::{Confirmer, Output};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Output writer for status messages
    /// * `confirmer` - Confirmation prompt for destructive operations
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &Output, confirmer: &mut dyn Confirmer) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cache_dir: PathBuf,
    remote_url: String,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given cache directory and remote URL.
    pub fn new(cache_dir: PathBuf, remote_url: String) -> Self {
        Self {
            cache_dir,
            remote_url,
        }
    }

    /// Get the cache directory path.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the remote archive URL.
    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand is a parse-time error
    /// (`arg_required_else_help`), so `None` never reaches execution.
    pub fn dispatch(
        &self,
        cli: &Cli,
        out: &Output,
        confirmer: &mut dyn Confirmer,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Generate(args)) => {
                let cmd = super::generate::GenerateCommand::new(
                    &self.cache_dir,
                    &self.remote_url,
                    args.clone(),
                );
                cmd.execute(out, confirmer)
            }
            Some(Commands::Sync(args)) => {
                let cmd = super::sync::SyncCommand::new(
                    &self.cache_dir,
                    &self.remote_url,
                    args.clone(),
                );
                cmd.execute(out, confirmer)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(
                    &self.cache_dir,
                    &self.remote_url,
                    args.clone(),
                );
                cmd.execute(out, confirmer)
            }
            Some(Commands::Reset(args)) => {
                let cmd = super::reset::ResetCommand::new(&self.cache_dir, args.clone());
                cmd.execute(out, confirmer)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out, confirmer)
            }
            None => Ok(CommandResult::success()),
        }
    }
}
