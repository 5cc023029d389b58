//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::checks::Severity;

use super::{HostcheckTheme, OutputMode, UserInterface};

/// Styled stdout implementation.
pub struct TerminalUI {
    term: Term,
    theme: HostcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI for a colour capability.
    pub fn new(supports_color: bool, mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: HostcheckTheme::for_capability(supports_color),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            writeln!(self.term, "  {}", self.theme.command.apply_to(format!("$ {}", command))).ok();
        }
    }

    fn show_verdict(&mut self, status: Severity) {
        writeln!(self.term, "\n{}", self.theme.format_verdict(status)).ok();
    }
}

/// Create the console UI.
///
/// `no_color` forces plain output; otherwise colour follows `NO_COLOR` and
/// whether stdout is a terminal.
pub fn create_ui(no_color: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    let supports_color = !no_color && super::should_use_colors();
    Box::new(TerminalUI::new(supports_color, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(true, OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
