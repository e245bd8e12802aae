//! Buildprep CLI entry point.

use std::process::ExitCode;

use buildprep::cli::Cli;
use buildprep::context::{self, BuildContext};
use buildprep::export::Exporter;
use buildprep::output::{Output, OutputMode};
use buildprep::run::Runner;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Diagnostics go to stderr; stdout carries the progress lines the CI
/// console shows.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("buildprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("buildprep=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("buildprep starting with args: {:?}", cli);

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

    // Determine workspace root: flag/GITHUB_WORKSPACE, then current dir
    let workspace = cli
        .workspace
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    if !context::is_ci() {
        tracing::warn!("no CI environment detected; run identity values may be empty");
    }

    let out = Output::new(output_mode);
    let ctx = BuildContext::from_env(workspace);
    let exporter = Exporter::new(cli.env_file.clone(), cli.dry_run);

    match Runner::new(ctx, exporter).execute(&out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
