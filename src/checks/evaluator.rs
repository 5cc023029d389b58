//! Scalar check evaluation.
//!
//! [`evaluate`] decides whether an observed value satisfies a descriptor's
//! expectation. It has no side effects: printing and persisting the
//! [`CheckResult`] belong to the caller.

use crate::error::{HostcheckError, Result};

use super::descriptor::{CheckDescriptor, CheckShape};
use super::multi_value::{self, TripleMismatch};
use super::operator::Operator;
use super::severity::Severity;

/// Report value written when a check produced no evidence.
pub const ABSENT_VALUE: &str = "absent";

/// Evidence observed for a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    /// No command ran, or it produced no output.
    Absent,
    /// Trimmed output.
    Value(String),
}

impl Observed {
    /// Reduce command output to its first non-empty trimmed line.
    pub fn first_line(output: &str) -> Self {
        output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(|line| Observed::Value(line.to_string()))
            .unwrap_or(Observed::Absent)
    }

    /// Keep the whole trimmed output, for triple checks.
    pub fn raw(output: &str) -> Self {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            Observed::Absent
        } else {
            Observed::Value(trimmed.to_string())
        }
    }

    /// Whether there is no evidence.
    pub fn is_absent(&self) -> bool {
        matches!(self, Observed::Absent)
    }

    /// The observed text, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Observed::Absent => None,
            Observed::Value(v) => Some(v),
        }
    }
}

/// Outcome of evaluating one check.
#[derive(Debug, Clone)]
pub struct CheckResult<'a> {
    /// The check that was evaluated.
    pub descriptor: &'a CheckDescriptor,
    /// What the host produced.
    pub observed: Observed,
    /// Value shown and persisted for this check.
    pub reported: String,
    /// Whether the expectation held.
    pub passed: bool,
    /// First failing position of a triple check.
    pub mismatch: Option<TripleMismatch>,
}

impl CheckResult<'_> {
    /// Severity recorded for this result: GREEN on pass, else the configured ceiling.
    pub fn status(&self) -> Severity {
        if self.passed {
            Severity::Green
        } else {
            self.descriptor.severity
        }
    }
}

/// Evaluate a check against its observed evidence.
///
/// Triple-shaped descriptors are delegated to [`multi_value::evaluate_triple`].
///
/// # Errors
///
/// Returns `UnknownOperator` if the descriptor's operator is not recognized,
/// and `IncompleteCheck` if it lacks an operator or expected value.
pub fn evaluate<'a>(descriptor: &'a CheckDescriptor, observed: Observed) -> Result<CheckResult<'a>> {
    let operator = operator_of(descriptor)?;
    let expected = descriptor
        .expected
        .as_ref()
        .ok_or_else(|| HostcheckError::IncompleteCheck {
            check: descriptor.name.clone(),
            message: "no expected value".to_string(),
        })?;

    if descriptor.shape == CheckShape::Triple {
        return multi_value::evaluate_triple(descriptor, operator, expected, observed);
    }

    let Some(actual) = observed.as_value() else {
        return Ok(absent_result(descriptor));
    };

    let expected = expected.as_text();
    let passed = operator
        .apply(actual, &expected)
        .ok_or_else(|| unknown_operator(descriptor, operator))?;

    let reported = if passed && *operator == Operator::Contains {
        "true".to_string()
    } else {
        actual.to_string()
    };

    tracing::debug!(
        check = %descriptor.name,
        %operator,
        expected = %expected,
        actual = %actual,
        passed,
        "evaluated check"
    );

    Ok(CheckResult {
        descriptor,
        observed,
        reported,
        passed,
        mismatch: None,
    })
}

pub(crate) fn operator_of(descriptor: &CheckDescriptor) -> Result<&Operator> {
    match &descriptor.operator {
        None => Err(HostcheckError::IncompleteCheck {
            check: descriptor.name.clone(),
            message: "no operator".to_string(),
        }),
        Some(op) if !op.is_known() => Err(unknown_operator(descriptor, op)),
        Some(op) => Ok(op),
    }
}

pub(crate) fn absent_result(descriptor: &CheckDescriptor) -> CheckResult<'_> {
    tracing::debug!(check = %descriptor.name, "no evidence, failing check");
    CheckResult {
        descriptor,
        observed: Observed::Absent,
        reported: ABSENT_VALUE.to_string(),
        passed: false,
        mismatch: None,
    }
}

fn unknown_operator(descriptor: &CheckDescriptor, operator: &Operator) -> HostcheckError {
    HostcheckError::UnknownOperator {
        check: descriptor.name.clone(),
        operator: operator.to_string(),
    }
}
