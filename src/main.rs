//! srcgen CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use srcgen::cache::default_cache_dir;
use srcgen::cli::{Cli, CommandDispatcher};
use srcgen::remote::DEFAULT_REMOTE_URL;
use srcgen::ui::{Output, OutputMode, TerminalConfirmer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("srcgen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("srcgen=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("srcgen starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let cache_dir = cli.cache_dir.clone().unwrap_or_else(default_cache_dir);
    let remote_url = cli
        .remote
        .clone()
        .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string());

    let out = Output::new(output_mode);
    let mut confirmer = TerminalConfirmer::new();
    let dispatcher = CommandDispatcher::new(cache_dir, remote_url);

    match dispatcher.dispatch(&cli, &out, &mut confirmer) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            out.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
