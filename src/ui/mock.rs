//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::Severity;
//! use hostcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Test if swappiness. Result: OK [0].");
//! ui.show_verdict(Severity::Green);
//!
//! assert!(ui.has_success("swappiness"));
//! assert_eq!(ui.verdict(), Some(Severity::Green));
//! ```

use crate::checks::Severity;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Records everything regardless of output mode.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    commands: Vec<String>,
    verdict: Option<Severity>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all hints shown.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all commands shown.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// The final verdict, once shown.
    pub fn verdict(&self) -> Option<Severity> {
        self.verdict
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any success line contains the given text.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }

    /// Check if any hint contains the given text.
    pub fn has_hint(&self, text: &str) -> bool {
        self.hints.iter().any(|m| m.contains(text))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        let mode = self.mode;
        *self = Self::with_mode(mode);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn show_verdict(&mut self, status: Severity) {
        self.verdict = Some(status);
    }
}
