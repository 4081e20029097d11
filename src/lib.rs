//! srcgen - Simplified source code generator.
//!
//! srcgen scaffolds new projects from a remote catalog of templates: a zip
//! archive whose top-level directories are templates. The archive is synced
//! into a per-user cache (keeping one backup generation for rollback) and
//! templates are extracted from it on demand.
//!
//! # Modules
//!
//! - [`archive`] - Template catalog and extraction from the cached archive
//! - [`cache`] - Cache directory lifecycle (sync / rollback / reset)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`remote`] - Streamed download of the remote archive
//! - [`ui`] - Confirmation prompts, progress bars, and terminal output

pub mod archive;
pub mod cache;
pub mod cli;
pub mod error;
pub mod remote;
pub mod ui;

pub use error::{Result, SrcgenError};
