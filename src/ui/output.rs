//! Output mode and writer.

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including step-by-step tracing.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows download progress bars.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
///
/// Status goes to stdout, errors and warnings to stderr.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a status line if the mode allows it.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Write a warning line to stderr.
    pub fn warning(&self, msg: &str) {
        eprintln!("{} {}", style("!").color256(208), msg);
    }

    /// Write an error line to stderr. Always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}
