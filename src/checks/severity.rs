//! RAG severity levels.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-level Red/Amber/Green severity.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Green < Amber < Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Green,
    Amber,
    Red,
}

impl Severity {
    /// Join two severities on the order `Green < Amber < Red`.
    pub fn fold(self, other: Severity) -> Severity {
        self.max(other)
    }

    /// Upper-case label used in the report file and console.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Green => "GREEN",
            Severity::Amber => "AMBER",
            Severity::Red => "RED",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "amber" => Ok(Self::Amber),
            "red" => Ok(Self::Red),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

// Configuration files in the wild use both `red` and `RED`.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
