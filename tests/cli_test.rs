//! Integration tests for the hostcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_host(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("descriptions.json"), config).unwrap();
    temp
}

fn hostcheck(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("hostcheck"));
    cmd.current_dir(temp.path())
        .env_remove("HOSTCHECK_CONFIG")
        .env_remove("HOSTCHECK_REPORT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

const GREEN_CONFIG: &str = r#"{
    "linux": {
        "groups": [
            {
                "name": "Memory settings",
                "checks": [
                    { "name": "swappiness", "command": "echo 0", "operator": "equals", "expected": "0", "severity": "amber" },
                    { "name": "jdk", "command": "echo 'Usage: javac <options>'", "operator": "contains", "expected": "Usage: javac", "severity": "red" }
                ]
            }
        ]
    }
}"#;

const AMBER_CONFIG: &str = r#"{
    "linux": {
        "groups": [
            {
                "name": "Memory settings",
                "checks": [
                    { "name": "swappiness", "command": "echo 60", "operator": "equals", "expected": "0", "severity": "amber",
                      "description": "Set vm.swappiness = 0 in /etc/sysctl.conf" }
                ]
            }
        ]
    }
}"#;

const RED_CONFIG: &str = r#"{
    "linux": {
        "groups": [
            {
                "name": "Software",
                "checks": [
                    { "name": "perf", "command": "true", "operator": "contains", "expected": "perf", "severity": "red" }
                ]
            }
        ]
    }
}"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hostcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Host environment prerequisite validation"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--report"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hostcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hostcheck"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hostcheck"));
    cmd.arg("nonexistent");
    cmd.assert().failure();
    Ok(())
}

#[test]
#[cfg(target_os = "linux")]
fn cli_missing_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    hostcheck(&temp)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Configuration not found"));
    assert!(!temp.path().join("validation.properties").exists());
    Ok(())
}

#[test]
#[cfg(target_os = "linux")]
fn cli_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_host("{ not json");
    hostcheck(&temp)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[cfg(target_os = "linux")]
mod on_linux {
    use super::*;

    #[test]
    fn green_run_exits_zero_and_writes_report() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp)
            .assert()
            .success()
            .stdout(predicate::str::contains("Memory settings"))
            .stdout(predicate::str::contains("Test if swappiness. Result: OK [0]."))
            .stdout(predicate::str::contains("Test if jdk. Result: OK [true]."))
            .stdout(predicate::str::contains("Overall checks status: GREEN"));

        let report = fs::read_to_string(temp.path().join("validation.properties"))?;
        assert_eq!(
            report,
            "swappiness_status = GREEN\nswappiness = 0\njdk_status = GREEN\njdk = true\n"
        );
        Ok(())
    }

    #[test]
    fn amber_run_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(AMBER_CONFIG);
        hostcheck(&temp)
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Test if swappiness. Result: FAIL. Expected [equals 0] but received [60].",
            ))
            .stdout(predicate::str::contains("/etc/sysctl.conf"))
            .stdout(predicate::str::contains("Overall checks status: AMBER"));
        Ok(())
    }

    #[test]
    fn red_run_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(RED_CONFIG);
        hostcheck(&temp)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Test: perf. Result: FAIL [expected but not present/installed].",
            ))
            .stdout(predicate::str::contains("Overall checks status: RED"));

        let report = fs::read_to_string(temp.path().join("validation.properties"))?;
        assert_eq!(report, "perf_status = RED\nperf = absent\n");
        Ok(())
    }

    #[test]
    fn second_run_rotates_report() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp).assert().success();
        fs::write(temp.path().join("descriptions.json"), RED_CONFIG)?;
        hostcheck(&temp).assert().code(1);

        let backup = fs::read_to_string(temp.path().join("validation.properties.bak"))?;
        assert!(backup.starts_with("swappiness_status = GREEN"));
        let report = fs::read_to_string(temp.path().join("validation.properties"))?;
        assert!(report.starts_with("perf_status = RED"));
        Ok(())
    }

    #[test]
    fn config_and_report_flags() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        fs::create_dir(temp.path().join("conf"))?;
        fs::create_dir(temp.path().join("out"))?;
        fs::write(temp.path().join("conf").join("host.json"), GREEN_CONFIG)?;

        hostcheck(&temp)
            .args(["--config", "conf/host.json", "--report", "out/host.properties"])
            .assert()
            .success();

        assert!(temp.path().join("out").join("host.properties").exists());
        assert!(!temp.path().join("validation.properties").exists());
        Ok(())
    }

    #[test]
    fn config_from_environment() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let config = temp.path().join("elsewhere.json");
        fs::write(&config, GREEN_CONFIG)?;

        hostcheck(&temp)
            .env("HOSTCHECK_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Overall checks status: GREEN"));
        Ok(())
    }

    #[test]
    fn yaml_config_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        fs::write(
            temp.path().join("descriptions.yml"),
            r#"
linux:
  groups:
    - name: Kernel
      checks:
        - name: kernel
          command: echo 5.15.0
          operator: greaterThan
          expected: "3.10"
          severity: red
"#,
        )?;

        hostcheck(&temp)
            .args(["--config", "descriptions.yml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Test if kernel. Result: OK [5.15.0]."));
        Ok(())
    }

    #[test]
    fn quiet_hides_passing_checks() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("Result: OK").not())
            .stdout(predicate::str::contains("Overall checks status: GREEN"));
        Ok(())
    }

    #[test]
    fn verbose_shows_commands() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp)
            .arg("--verbose")
            .assert()
            .success()
            .stdout(predicate::str::contains("$ echo 0"));
        Ok(())
    }

    #[test]
    fn no_color_output_is_plain() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(RED_CONFIG);
        hostcheck(&temp)
            .env_remove("NO_COLOR")
            .arg("--no-color")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\u{1b}[").not());
        Ok(())
    }

    #[test]
    fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp)
            .arg("--debug")
            .assert()
            .success()
            .stderr(predicate::str::contains("loading check descriptions"))
            .stdout(predicate::str::contains("loading check descriptions").not());
        Ok(())
    }

    #[test]
    fn list_does_not_run_checks() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(GREEN_CONFIG);
        hostcheck(&temp)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("swappiness [AMBER] $ echo 0: equals 0"))
            .stdout(predicate::str::contains("Overall checks status").not());
        assert!(!temp.path().join("validation.properties").exists());
        Ok(())
    }

    #[test]
    fn config_warnings_do_not_stop_run() -> Result<(), Box<dyn std::error::Error>> {
        let temp = setup_host(
            r#"{ "linux": { "groups": [ { "name": "Odd", "checks": [
                { "name": "odd", "command": "echo 1", "operator": "~", "expected": "1", "severity": "amber" }
            ] } ] } }"#,
        );
        hostcheck(&temp)
            .assert()
            .success()
            .stdout(predicate::str::contains("[unknown-operator] odd"))
            .stdout(predicate::str::contains("Overall checks status: AMBER"));

        let report = fs::read_to_string(temp.path().join("validation.properties"))?;
        assert!(report.starts_with("odd_status = ERROR\n"));
        Ok(())
    }
}
