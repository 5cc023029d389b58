//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult, CommandRunner, ShellRunner, DEFAULT_TIMEOUT};
pub use platform::shell_invocation;
