//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::detection::HostOs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::list::ListCommand;
use super::run::RunCommand;

/// Exit code for a run whose overall status is RED.
pub const EXIT_RED: i32 = 1;

/// Exit code for a run that could not start or complete.
pub const EXIT_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    os: HostOs,
}

impl CommandDispatcher {
    /// Create a dispatcher for the host this binary runs on.
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            os: HostOs::detect(),
        }
    }

    /// Override the detected operating system.
    pub fn with_os(mut self, os: HostOs) -> Self {
        self.os = os;
        self
    }

    /// Get the directory relative paths resolve against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command. No subcommand means `run`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.command.unwrap_or(Commands::Run) {
            Commands::Run => RunCommand::new(
                &self.working_dir,
                cli.config.clone(),
                cli.report.clone(),
                self.os.clone(),
            )
            .execute(ui),
            Commands::List => {
                ListCommand::new(&self.working_dir, cli.config.clone(), self.os.clone()).execute(ui)
            }
        }
    }
}
