//! Platform-specific shell selection.

/// Shell executable and the flag that passes it a command string.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
