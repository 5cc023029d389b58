//! Shell command execution.
//!
//! Checks run their commands through a platform shell (`sh -c` on Unix,
//! `cmd /C` on Windows). Every command is bounded by a timeout; a command
//! that cannot be launched, times out, or prints nothing yields
//! [`Observed::Absent`].

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::checks::Observed;
use crate::error::{HostcheckError, Result};

/// Default per-command timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command was killed after the timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Whether command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Source of command output for checks.
///
/// The orchestrator only talks to this trait so tests can script the host.
pub trait CommandRunner {
    /// Run a command and return its raw trimmed output.
    fn run_raw(&mut self, command: &str) -> Observed;

    /// Run a command and keep only the first non-empty output line.
    fn run(&mut self, command: &str) -> Observed {
        match self.run_raw(command) {
            Observed::Value(text) => Observed::first_line(&text),
            Observed::Absent => Observed::Absent,
        }
    }
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    timeout: Duration,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner {
    /// Create a runner with the default timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a runner with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for ShellRunner {
    fn run_raw(&mut self, command: &str) -> Observed {
        match execute(command, self.timeout) {
            Ok(result) => {
                tracing::debug!(
                    command,
                    exit_code = ?result.exit_code,
                    timed_out = result.timed_out,
                    duration_ms = result.duration.as_millis() as u64,
                    "command finished"
                );
                if result.timed_out {
                    Observed::Absent
                } else {
                    Observed::raw(&result.stdout)
                }
            }
            Err(e) => {
                tracing::warn!(command, error = %e, "command could not be launched");
                Observed::Absent
            }
        }
    }
}

/// Execute a shell command, capturing stdout, killing it after `timeout`.
pub fn execute(command: &str, timeout: Duration) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = super::platform::shell_invocation();
    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    let mut child = cmd.spawn().map_err(|_| HostcheckError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    // Drain stdout on a separate thread so a chatty command cannot block on
    // a full pipe while we wait for it.
    let (tx, rx) = mpsc::channel();
    if let Some(mut stdout) = child.stdout.take() {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
        });
    }

    let deadline = start + timeout;
    let (exit_code, mut timed_out) = wait_with_timeout(&mut child, deadline)?;

    // Background children of the shell can hold the pipe open after the
    // shell exits, so the read shares the same deadline. The reader thread
    // is left behind if it misses it.
    let stdout = if timed_out {
        String::new()
    } else {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(output) => output,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                timed_out = true;
                String::new()
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => String::new(),
        }
    };

    Ok(CommandResult {
        exit_code,
        stdout,
        duration: start.elapsed(),
        timed_out,
    })
}

fn wait_with_timeout(child: &mut Child, deadline: Instant) -> Result<(Option<i32>, bool)> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status.code(), false));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok((None, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
