//! Tab-separated triple checks (`tcp_mem`, `tcp_rmem`, `tcp_wmem` style).
//!
//! A triple check reads three positional values from one command and
//! compares each against an expected value, either three literal numbers
//! or thresholds derived from a single base. The check is atomic: the first
//! mismatching position fails it and is the only one reported.

use crate::error::{HostcheckError, Result};

use super::descriptor::{CheckDescriptor, Expected};
use super::evaluator::{absent_result, CheckResult, Observed};
use super::operator::Operator;

/// Names of the three positions, in order.
pub const POSITION_LABELS: [&str; 3] = ["low", "pressure", "high"];

const LOW_FACTOR: f64 = 0.4;
const PRESSURE_FACTOR: f64 = 1.05;
const HIGH_FACTOR: f64 = 1.6;

/// The first failing position of a triple check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleMismatch {
    /// Zero-based position.
    pub index: usize,
    /// Position label (`low`, `pressure`, `high`).
    pub label: &'static str,
    /// Expected value at this position.
    pub expected: String,
    /// Observed value at this position, `None` when missing.
    pub actual: Option<String>,
}

/// Derive `[low, pressure, high]` from a base number.
///
/// Each threshold is the integer part of `base × factor`.
pub fn derive_thresholds(base: f64) -> [i64; 3] {
    [
        (base * LOW_FACTOR).trunc() as i64,
        (base * PRESSURE_FACTOR).trunc() as i64,
        (base * HIGH_FACTOR).trunc() as i64,
    ]
}

/// Resolve the three expected values of a triple check.
pub fn expected_triple(descriptor: &CheckDescriptor, expected: &Expected) -> Result<[String; 3]> {
    match expected {
        Expected::Derived { derived_from } => Ok(derive_thresholds(*derived_from).map(|v| v.to_string())),
        Expected::Literal(text) => {
            let parts: Vec<&str> = text.split_whitespace().collect();
            match parts.as_slice() {
                [low, pressure, high] => Ok([low.to_string(), pressure.to_string(), high.to_string()]),
                _ => Err(HostcheckError::IncompleteCheck {
                    check: descriptor.name.clone(),
                    message: format!("expected three values, got '{}'", text),
                }),
            }
        }
    }
}

/// Split the first non-empty line of raw command output on tabs into
/// positional values. Later lines are ignored.
pub fn split_triple(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .split('\t')
        .map(|part| part.trim().to_string())
        .collect()
}

/// Evaluate a triple-shaped check.
pub fn evaluate_triple<'a>(
    descriptor: &'a CheckDescriptor,
    operator: &Operator,
    expected: &Expected,
    observed: Observed,
) -> Result<CheckResult<'a>> {
    let expected = expected_triple(descriptor, expected)?;

    let Some(raw) = observed.as_value() else {
        return Ok(absent_result(descriptor));
    };
    let results = split_triple(raw);

    let mut mismatch = None;
    for (index, expected_value) in expected.iter().enumerate() {
        let actual = results.get(index).filter(|v| !v.is_empty());
        let passed = match actual {
            Some(actual) => operator.apply(actual, expected_value).ok_or_else(|| {
                HostcheckError::UnknownOperator {
                    check: descriptor.name.clone(),
                    operator: operator.to_string(),
                }
            })?,
            None => false,
        };
        if !passed {
            mismatch = Some(TripleMismatch {
                index,
                label: POSITION_LABELS[index],
                expected: expected_value.clone(),
                actual: actual.cloned(),
            });
            break;
        }
    }

    tracing::debug!(
        check = %descriptor.name,
        %operator,
        expected = ?expected,
        actual = ?results,
        mismatch = ?mismatch,
        "evaluated triple check"
    );

    let reported = results.join(" ");
    Ok(CheckResult {
        descriptor,
        passed: mismatch.is_none(),
        observed,
        reported,
        mismatch,
    })
}
