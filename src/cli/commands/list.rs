//! List command implementation.
//!
//! The `hostcheck list` command prints the checks configured for the host
//! without running any of them.

use std::path::{Path, PathBuf};

use crate::checks::{CheckDescriptor, CheckShape, EvidenceSource};
use crate::config::CheckGroup;
use crate::detection::HostOs;
use crate::error::{HostcheckError, Result};
use crate::runner::TIME_SYNC_HEADER;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::run::load_and_lint;

/// The list command implementation.
pub struct ListCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    os: HostOs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(working_dir: &Path, config: Option<PathBuf>, os: HostOs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            os,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.os.is_supported() {
            return Err(HostcheckError::UnsupportedPlatform {
                os: self.os.to_string(),
            });
        }
        let config = load_and_lint(&self.working_dir, self.config.as_deref(), ui)?;

        if let Some(platform) = config.platform(&self.os) {
            for group in &platform.groups {
                show_group(ui, group);
            }
            if let Some(time_sync) = &platform.time_sync {
                ui.show_header(TIME_SYNC_HEADER);
                for check in [
                    &time_sync.primary_installed,
                    &time_sync.primary_running,
                    &time_sync.secondary_installed,
                    &time_sync.secondary_running,
                ] {
                    ui.message(&describe(check));
                }
            }
        } else {
            ui.message(&format!("No checks configured for {}", self.os));
        }

        if let Some(java) = &config.java {
            show_group(ui, java);
        }

        Ok(CommandResult::success())
    }
}

fn show_group(ui: &mut dyn UserInterface, group: &CheckGroup) {
    ui.show_header(&group.name);
    for check in &group.checks {
        ui.message(&describe(check));
    }
}

/// One-line summary of a check: name, severity, evidence source and expectation.
pub fn describe(check: &CheckDescriptor) -> String {
    let source = match check.source() {
        EvidenceSource::Property(name) => format!("property {}", name),
        EvidenceSource::Command(command) => format!("$ {}", command),
        EvidenceSource::None => "no source".to_string(),
    };
    let operator = check
        .operator
        .as_ref()
        .map(|op| op.to_string())
        .unwrap_or_else(|| "?".to_string());
    let shape = match check.shape {
        CheckShape::Triple => " (triple)",
        CheckShape::Scalar => "",
    };

    format!(
        "  {} [{}] {}: {} {}{}",
        check.name,
        check.severity,
        source,
        operator,
        check.expected_text(),
        shape
    )
}
