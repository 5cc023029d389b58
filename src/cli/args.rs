//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::DEFAULT_REPORT_FILE;
use crate::ui::OutputMode;

/// hostcheck - Host environment prerequisite validation.
#[derive(Debug, Parser)]
#[command(name = "hostcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the check descriptions (defaults to ./descriptions.json)
    #[arg(short, long, global = true, env = "HOSTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path of the report file
    #[arg(short, long, global = true, env = "HOSTCHECK_REPORT", default_value = DEFAULT_REPORT_FILE)]
    pub report: PathBuf,

    /// Show the command behind every check
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show failures and the final status
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by `--quiet` and `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run every check for this host (default if no command specified)
    Run,

    /// List the checks configured for this host without running them
    List,
}
