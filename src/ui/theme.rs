//! Visual theme and styling.

use console::Style;

use crate::checks::Severity;

/// hostcheck's visual theme.
///
/// Built from a colour capability: with colour off every style is empty, so
/// no escape codes are emitted at all.
#[derive(Debug, Clone)]
pub struct HostcheckTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for amber outcomes (orange).
    pub warning: Style,
    /// Style for red outcomes and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for group headers (bold).
    pub header: Style,
    /// Style for commands shown in verbose output (dim italic).
    pub command: Style,
    /// Style for failure guidance (magenta dim).
    pub hint: Style,
}

impl Default for HostcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HostcheckTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            command: Style::new().dim().italic(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the theme for a colour capability.
    pub fn for_capability(supports_color: bool) -> Self {
        if supports_color {
            Self::new().forced()
        } else {
            Self::plain()
        }
    }

    // console only emits codes when it believes stdout is a terminal; the
    // capability has already been decided by the caller.
    fn forced(mut self) -> Self {
        for style in [
            &mut self.success,
            &mut self.warning,
            &mut self.error,
            &mut self.dim,
            &mut self.header,
            &mut self.command,
            &mut self.hint,
        ] {
            *style = style.clone().force_styling(true);
        }
        self
    }

    /// Style for a severity.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Green => &self.success,
            Severity::Amber => &self.warning,
            Severity::Red => &self.error,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a group header.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.dim.apply_to("----------------------------------"),
            self.header.apply_to(title)
        )
    }

    /// Format the final verdict line.
    pub fn format_verdict(&self, status: Severity) -> String {
        format!(
            "Overall checks status: {}",
            self.severity(status).apply_to(status.as_str())
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term() && console::colors_enabled()
}
