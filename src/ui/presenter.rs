//! Human-readable check outcome lines.
//!
//! Passing checks go to [`UserInterface::success`], failures to `warning` or
//! `error` depending on their severity, followed by the check's description
//! as a hint.

use crate::checks::{CheckDescriptor, CheckResult, Severity};
use crate::error::HostcheckError;

use super::UserInterface;

/// Format the console line for an evaluated check.
pub fn outcome_line(result: &CheckResult<'_>) -> String {
    let name = &result.descriptor.name;
    if result.passed {
        return format!("Test if {}. Result: OK [{}].", name, result.reported);
    }
    if result.observed.is_absent() {
        return format!(
            "Test: {}. Result: FAIL [expected but not present/installed].",
            name
        );
    }

    let operator = result
        .descriptor
        .operator
        .as_ref()
        .map(|op| op.to_string())
        .unwrap_or_default();

    match &result.mismatch {
        Some(mismatch) => format!(
            "Test if {}. Result: FAIL. Expected {} value [{} {}] but received [{}].",
            name,
            mismatch.label,
            operator,
            mismatch.expected,
            mismatch.actual.as_deref().unwrap_or("nothing")
        ),
        None => format!(
            "Test if {}. Result: FAIL. Expected [{} {}] but received [{}].",
            name,
            operator,
            result.descriptor.expected_text(),
            result.reported
        ),
    }
}

/// Format the console line for a check that could not be evaluated.
pub fn error_line(descriptor: &CheckDescriptor, error: &HostcheckError) -> String {
    format!("Test: {}. Result: ERROR [{}].", descriptor.name, error)
}

/// Show an evaluated check.
pub fn present(ui: &mut dyn UserInterface, result: &CheckResult<'_>) {
    let line = outcome_line(result);
    if result.passed {
        ui.success(&line);
        return;
    }
    show_failure(ui, result.descriptor, result.status(), &line);
}

/// Show a check whose configuration is broken.
pub fn present_error(ui: &mut dyn UserInterface, descriptor: &CheckDescriptor, error: &HostcheckError) {
    ui.error(&error_line(descriptor, error));
    show_description(ui, descriptor);
}

fn show_failure(ui: &mut dyn UserInterface, descriptor: &CheckDescriptor, status: Severity, line: &str) {
    match status {
        Severity::Red => ui.error(line),
        _ => ui.warning(line),
    }
    show_description(ui, descriptor);
}

fn show_description(ui: &mut dyn UserInterface, descriptor: &CheckDescriptor) {
    let description = descriptor.description.trim();
    if !description.is_empty() {
        ui.show_hint(description);
    }
}
