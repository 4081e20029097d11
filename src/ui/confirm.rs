//! Confirmation prompt implementations.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{Result, SrcgenError};

use super::Confirmer;

/// Convert dialoguer errors to SrcgenError.
fn map_dialoguer_err(e: dialoguer::Error) -> SrcgenError {
    SrcgenError::Io(e.into())
}

/// Interactive confirmer backed by dialoguer.
///
/// Prompts on stderr so piped stdout stays clean.
pub struct TerminalConfirmer {
    term: Term,
}

impl TerminalConfirmer {
    /// Create a confirmer attached to the current terminal.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}

/// Confirmer that answers every question the same way without prompting.
///
/// Used for `--yes` / `--force` flags and non-interactive runs.
pub struct AutoConfirmer {
    answer: bool,
}

impl AutoConfirmer {
    /// Create a confirmer with a fixed answer.
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Confirmer for AutoConfirmer {
    fn confirm(&mut self, _question: &str, _default: bool) -> Result<bool> {
        Ok(self.answer)
    }
}
