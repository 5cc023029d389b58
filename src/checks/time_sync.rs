//! Time synchronisation composite check.
//!
//! Prefers a primary service (typically ntpd) and falls back to a secondary
//! one (typically chronyd). Unlike ordinary groups this path short-circuits:
//! once a branch is taken its siblings are never evaluated.

use serde::{Deserialize, Serialize};

use super::descriptor::CheckDescriptor;
use super::severity::Severity;

/// The four checks making up the time-sync decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSyncChecks {
    pub primary_installed: CheckDescriptor,
    pub primary_running: CheckDescriptor,
    pub secondary_installed: CheckDescriptor,
    pub secondary_running: CheckDescriptor,
}

/// Which branch of the decision tree settled the composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSyncOutcome<'a> {
    /// Primary service installed and running.
    PrimaryRunning,
    /// Primary absent, secondary installed and running.
    SecondaryRunning,
    /// The composite failed at this check.
    Failed(&'a CheckDescriptor),
}

impl TimeSyncOutcome<'_> {
    /// Severity contributed to the run.
    pub fn status(&self) -> Severity {
        match self {
            TimeSyncOutcome::Failed(descriptor) => descriptor.severity,
            _ => Severity::Green,
        }
    }

    /// The failing check, if any.
    pub fn failed(&self) -> Option<&CheckDescriptor> {
        match self {
            TimeSyncOutcome::Failed(descriptor) => Some(*descriptor),
            _ => None,
        }
    }
}

/// Walk the decision tree, calling `run` only on the checks the path needs.
pub fn evaluate_time_sync<'a, F>(checks: &'a TimeSyncChecks, mut run: F) -> TimeSyncOutcome<'a>
where
    F: FnMut(&'a CheckDescriptor) -> bool,
{
    if run(&checks.primary_installed) {
        return if run(&checks.primary_running) {
            TimeSyncOutcome::PrimaryRunning
        } else {
            TimeSyncOutcome::Failed(&checks.primary_running)
        };
    }

    if run(&checks.secondary_installed) {
        return if run(&checks.secondary_running) {
            TimeSyncOutcome::SecondaryRunning
        } else {
            TimeSyncOutcome::Failed(&checks.secondary_running)
        };
    }

    TimeSyncOutcome::Failed(&checks.secondary_installed)
}
