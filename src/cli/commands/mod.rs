//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands each one the shared
//! cache/remote configuration, the output writer, and the confirmer.

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod list;
pub mod reset;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
