//! Host operating system detection.

use std::fmt;

/// Operating systems with a check sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    Windows,
    /// Anything else; carries the detected name for the error message.
    Unsupported(String),
}

impl HostOs {
    /// Detect the OS this binary runs on.
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            _ => HostOs::Unsupported(name.to_string()),
        }
    }

    /// Whether a check sequence exists for this OS.
    pub fn is_supported(&self) -> bool {
        !matches!(self, HostOs::Unsupported(_))
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Linux => f.write_str("Linux"),
            HostOs::Windows => f.write_str("Windows"),
            HostOs::Unsupported(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_names() {
        assert_eq!(HostOs::from_name("linux"), HostOs::Linux);
        assert_eq!(HostOs::from_name("Windows"), HostOs::Windows);
    }

    #[test]
    fn other_names_are_unsupported() {
        let os = HostOs::from_name("macos");
        assert_eq!(os, HostOs::Unsupported("macos".to_string()));
        assert!(!os.is_supported());
        assert_eq!(os.to_string(), "macos");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn detects_linux_host() {
        assert_eq!(HostOs::detect(), HostOs::Linux);
    }
}
