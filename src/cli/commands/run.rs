//! Run command implementation.
//!
//! The `hostcheck run` command evaluates every configured check for the
//! host and writes the report.

use std::path::{Path, PathBuf};

use crate::checks::Severity;
use crate::config::{load_config, resolve_config_path, validate, ValidationConfig};
use crate::detection::HostOs;
use crate::error::{HostcheckError, Result};
use crate::report::ReportWriter;
use crate::runner::ValidationRun;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_RED};

/// The run command implementation.
pub struct RunCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    report: PathBuf,
    os: HostOs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(working_dir: &Path, config: Option<PathBuf>, report: PathBuf, os: HostOs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            report,
            os,
        }
    }

    /// Report location, resolved against the working directory.
    pub fn report_path(&self) -> PathBuf {
        self.working_dir.join(&self.report)
    }

    /// Run the checks with a specific command runner.
    pub fn execute_with(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if !self.os.is_supported() {
            return Err(HostcheckError::UnsupportedPlatform {
                os: self.os.to_string(),
            });
        }

        let config = load_and_lint(&self.working_dir, self.config.as_deref(), ui)?;
        let report = ReportWriter::create(self.report_path())?;

        let status = ValidationRun::new(runner, &report, ui).execute(&config, &self.os)?;
        Ok(match status {
            Severity::Red => CommandResult::failure(EXIT_RED),
            Severity::Green | Severity::Amber => CommandResult::success(),
        })
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut runner = ShellRunner::new();
        self.execute_with(&mut runner, ui)
    }
}

/// Load the check descriptions and surface lint findings as warnings.
pub(crate) fn load_and_lint(
    working_dir: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<ValidationConfig> {
    let path = resolve_config_path(config_override, working_dir);
    tracing::debug!(path = %path.display(), "loading check descriptions");
    let config = load_config(&path)?;

    for issue in validate(&config) {
        tracing::warn!(rule = issue.rule, check = %issue.check, "{}", issue.message);
        ui.warning(&format!("Config: {}", issue));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Observed;
    use crate::ui::MockUI;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    struct FixedRunner(HashMap<&'static str, &'static str>);

    impl CommandRunner for FixedRunner {
        fn run_raw(&mut self, command: &str) -> Observed {
            self.0
                .get(command)
                .map(|out| Observed::raw(out))
                .unwrap_or(Observed::Absent)
        }
    }

    const CONFIG: &str = r#"{
        "linux": {
            "groups": [
                {
                    "name": "Memory settings",
                    "checks": [
                        {
                            "name": "vm.swappiness",
                            "command": "sysctl -n vm.swappiness",
                            "operator": "equals",
                            "expected": 0,
                            "severity": "red",
                            "description": "Set vm.swappiness = 0"
                        }
                    ]
                }
            ]
        }
    }"#;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("descriptions.json"), CONFIG).unwrap();
        temp
    }

    fn command(temp: &TempDir, os: HostOs) -> RunCommand {
        RunCommand::new(temp.path(), None, PathBuf::from("validation.properties"), os)
    }

    #[test]
    fn green_run_exits_zero() {
        let temp = setup();
        let mut runner = FixedRunner(HashMap::from([("sysctl -n vm.swappiness", "0")]));
        let mut ui = MockUI::new();

        let result = command(&temp, HostOs::Linux)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.verdict(), Some(Severity::Green));
        assert!(temp.path().join("validation.properties").exists());
    }

    #[test]
    fn red_run_exits_one() {
        let temp = setup();
        let mut runner = FixedRunner(HashMap::from([("sysctl -n vm.swappiness", "60")]));
        let mut ui = MockUI::new();

        let result = command(&temp, HostOs::Linux)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, EXIT_RED);
        assert!(ui.has_hint("vm.swappiness = 0"));
    }

    #[test]
    fn missing_config_is_error() {
        let temp = TempDir::new().unwrap();
        let mut runner = FixedRunner(HashMap::new());
        let mut ui = MockUI::new();

        let err = command(&temp, HostOs::Linux)
            .execute_with(&mut runner, &mut ui)
            .unwrap_err();

        assert!(matches!(err, HostcheckError::ConfigNotFound { .. }));
        assert!(!temp.path().join("validation.properties").exists());
    }

    #[test]
    fn unsupported_os_leaves_previous_report() {
        let temp = setup();
        fs::write(temp.path().join("validation.properties"), "previous\n").unwrap();
        let mut runner = FixedRunner(HashMap::new());
        let mut ui = MockUI::new();

        let err = command(&temp, HostOs::from_name("freebsd"))
            .execute_with(&mut runner, &mut ui)
            .unwrap_err();

        assert!(matches!(err, HostcheckError::UnsupportedPlatform { .. }));
        assert_eq!(
            fs::read_to_string(temp.path().join("validation.properties")).unwrap(),
            "previous\n"
        );
    }

    #[test]
    fn lint_findings_are_warnings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("descriptions.json"),
            r#"{ "linux": { "groups": [ { "name": "Odd", "checks": [
                { "name": "odd", "command": "echo 1", "operator": "~", "expected": "1", "severity": "amber" }
            ] } ] } }"#,
        )
        .unwrap();
        let mut runner = FixedRunner(HashMap::from([("echo 1", "1")]));
        let mut ui = MockUI::new();

        let result = command(&temp, HostOs::Linux)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Config: [unknown-operator] odd"));
        assert_eq!(ui.verdict(), Some(Severity::Amber));
    }
}
