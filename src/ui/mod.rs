//! User interface abstractions.
//!
//! This module provides a trait-based UI layer that supports:
//! - A styled terminal implementation ([`TerminalUI`])
//! - A mock implementation for testing ([`MockUI`])
//! - Check outcome formatting ([`presenter`])

pub mod mock;
pub mod output;
pub mod presenter;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HostcheckTheme};

use crate::checks::Severity;

/// Abstraction over console output.
///
/// The orchestrator and presenter only talk to this trait, so a run can be
/// captured by [`MockUI`] in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a plain message.
    fn message(&mut self, msg: &str);

    /// Show a passing outcome.
    fn success(&mut self, msg: &str);

    /// Show an AMBER outcome.
    fn warning(&mut self, msg: &str);

    /// Show a RED outcome or an error. Always shown, even in quiet mode.
    fn error(&mut self, msg: &str);

    /// Show a group header.
    fn show_header(&mut self, title: &str);

    /// Show failure guidance below a check.
    fn show_hint(&mut self, hint: &str);

    /// Show the command behind a check (verbose mode only).
    fn show_command(&mut self, command: &str);

    /// Show the final status line.
    fn show_verdict(&mut self, status: Severity);
}
