//! Error types for srcgen operations.
//!
//! This module defines [`SrcgenError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SrcgenError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SrcgenError::Other`) for unexpected errors
//! - Declined confirmations are not errors; they are outcome variants on the
//!   cache operations themselves

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for srcgen operations.
#[derive(Debug, Error)]
pub enum SrcgenError {
    /// Requested template is not present in the catalog.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Remote archive fetch failed (network, non-2xx, interrupted).
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// Cached archive could not be opened or read as a zip file.
    #[error("Failed to read archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    /// IO error wrapper (directory creation, rename, file write).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SrcgenError {
    /// Build an [`SrcgenError::Archive`] from a zip error.
    pub fn archive(path: &std::path::Path, err: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for srcgen operations.
pub type Result<T> = std::result::Result<T, SrcgenError>;
