//! Template archive reading.
//!
//! The cached archive is a zip file whose top-level directory entries are
//! templates. [`TemplateCatalog`] enumerates them; [`TemplateGenerator`]
//! extracts one template's subtree into a destination directory. Both open
//! the archive as a scoped, read-only resource per call and never mutate
//! cache state.

pub mod catalog;
pub mod generator;

pub use catalog::TemplateCatalog;
pub use generator::{Generated, TemplateGenerator};
