//! CLI argument definitions.
//!
//! One-shot tool, no subcommands; everything is flags. The workspace and
//! env-file flags default from the runner-provided `GITHUB_WORKSPACE` and
//! `GITHUB_ENV` variables.

use clap::Parser;
use std::path::PathBuf;

/// Buildprep - CI build context detection and deployment signal export.
#[derive(Debug, Parser)]
#[command(name = "buildprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root containing the checkout
    #[arg(short, long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Runner env file exported variables are appended to
    #[arg(long, env = "GITHUB_ENV")]
    pub env_file: Option<PathBuf>,

    /// Log exports and writes without performing them
    #[arg(long)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
