//! Folding check outcomes into group and run verdicts.

use super::descriptor::CheckDescriptor;
use super::severity::Severity;

/// Join two severities. Equivalent to `max` on the ordered enum.
pub fn fold(current: Severity, severity: Severity) -> Severity {
    current.fold(severity)
}

/// Running verdict of a validation run, seeded GREEN and only ever raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    status: Severity,
}

impl Aggregate {
    /// Start a fresh aggregate at GREEN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one severity into the verdict.
    pub fn record(&mut self, severity: Severity) {
        self.status = fold(self.status, severity);
    }

    /// Current verdict.
    pub fn status(&self) -> Severity {
        self.status
    }
}

/// Result of running every check in a group.
#[derive(Debug, Clone)]
pub struct GroupOutcome<'a> {
    /// Folded severity of the failed checks, GREEN if none failed.
    pub status: Severity,
    /// Checks that did not pass, in evaluation order.
    pub failed: Vec<&'a CheckDescriptor>,
}

impl GroupOutcome<'_> {
    /// Whether every check in the group passed.
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every descriptor in a group and fold the severities of the failures.
///
/// Every check runs, even after an earlier one fails.
pub fn fold_group<'a, F>(descriptors: &'a [CheckDescriptor], mut run: F) -> GroupOutcome<'a>
where
    F: FnMut(&'a CheckDescriptor) -> bool,
{
    let mut status = Severity::Green;
    let mut failed = Vec::new();

    for descriptor in descriptors {
        if !run(descriptor) {
            status = fold(status, descriptor.severity);
            failed.push(descriptor);
        }
    }

    GroupOutcome { status, failed }
}
