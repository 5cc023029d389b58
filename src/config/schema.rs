//! Configuration schema.
//!
//! The configuration is a tree: per platform an ordered list of named check
//! groups plus an optional time-sync composite, and a Java group shared by
//! every platform.
//!
//! ```json
//! {
//!   "linux": {
//!     "groups": [
//!       { "name": "Kernel version", "checks": [ { "name": "kernel", "command": "uname -r",
//!         "operator": "greaterThan", "expected": "3.10", "severity": "red" } ] }
//!     ],
//!     "timeSync": { "primaryInstalled": {}, "primaryRunning": {},
//!                   "secondaryInstalled": {}, "secondaryRunning": {} }
//!   },
//!   "windows": { "groups": [] },
//!   "java": { "name": "Java", "checks": [] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::checks::{CheckDescriptor, TimeSyncChecks};
use crate::detection::HostOs;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Linux check tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<PlatformChecks>,

    /// Windows check tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<PlatformChecks>,

    /// JVM checks, run on every platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<CheckGroup>,
}

/// Checks for one operating system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformChecks {
    /// Groups in run order.
    #[serde(default)]
    pub groups: Vec<CheckGroup>,

    /// Primary/secondary time service composite, run after the groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sync: Option<TimeSyncChecks>,
}

/// A named, ordered collection of checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckGroup {
    pub name: String,
    #[serde(default)]
    pub checks: Vec<CheckDescriptor>,
}

impl ValidationConfig {
    /// The check tree for an OS, if configured.
    pub fn platform(&self, os: &HostOs) -> Option<&PlatformChecks> {
        match os {
            HostOs::Linux => self.linux.as_ref(),
            HostOs::Windows => self.windows.as_ref(),
            HostOs::Unsupported(_) => None,
        }
    }

    /// Every descriptor in the configuration, for linting.
    pub fn all_checks(&self) -> Vec<&CheckDescriptor> {
        let mut checks = Vec::new();
        for platform in [&self.linux, &self.windows].into_iter().flatten() {
            checks.extend(platform.all_checks());
        }
        if let Some(java) = &self.java {
            checks.extend(java.checks.iter());
        }
        checks
    }
}

impl PlatformChecks {
    /// Every descriptor of this platform, groups first.
    pub fn all_checks(&self) -> Vec<&CheckDescriptor> {
        let mut checks: Vec<&CheckDescriptor> =
            self.groups.iter().flat_map(|g| g.checks.iter()).collect();
        if let Some(ts) = &self.time_sync {
            checks.extend([
                &ts.primary_installed,
                &ts.primary_running,
                &ts.secondary_installed,
                &ts.secondary_running,
            ]);
        }
        checks
    }
}
