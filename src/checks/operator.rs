//! Comparison operators for check descriptors.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Comparison applied between an observed value and the expected value.
///
/// Unrecognized operator text is kept as [`Operator::Unknown`] so a bad
/// descriptor surfaces as a per-check error instead of failing the whole
/// configuration load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    GreaterThan,
    LessThan,
    NotEquals,
    Contains,
    Unknown(String),
}

impl Operator {
    /// Whether this operator is one of the recognized comparisons.
    pub fn is_known(&self) -> bool {
        !matches!(self, Operator::Unknown(_))
    }

    /// Apply the operator. Returns `None` for an unknown operator.
    pub fn apply(&self, actual: &str, expected: &str) -> Option<bool> {
        let passed = match self {
            Operator::Equals => actual == expected,
            Operator::NotEquals => actual != expected,
            Operator::GreaterThan => compare_loose(actual, expected) == Ordering::Greater,
            Operator::LessThan => compare_loose(actual, expected) == Ordering::Less,
            Operator::Contains => actual.contains(expected),
            Operator::Unknown(_) => return None,
        };
        Some(passed)
    }

    /// Canonical configuration spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::NotEquals => "notEquals",
            Operator::Contains => "contains",
            Operator::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Operator {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "equals" | "===" | "==" => Operator::Equals,
            "greaterThan" | ">" => Operator::GreaterThan,
            "lessThan" | "<" => Operator::LessThan,
            "notEquals" | "!==" | "!=" => Operator::NotEquals,
            "contains" => Operator::Contains,
            _ => Operator::Unknown(raw),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare numerically when both sides parse as numbers, else lexicographically.
pub fn compare_loose(actual: &str, expected: &str) -> Ordering {
    match (actual.trim().parse::<f64>(), expected.trim().parse::<f64>()) {
        (Ok(a), Ok(e)) => a.partial_cmp(&e).unwrap_or(Ordering::Equal),
        _ => actual.cmp(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!(Operator::from("equals".to_string()), Operator::Equals);
        assert_eq!(Operator::from("greaterThan".to_string()), Operator::GreaterThan);
        assert_eq!(Operator::from("lessThan".to_string()), Operator::LessThan);
        assert_eq!(Operator::from("notEquals".to_string()), Operator::NotEquals);
        assert_eq!(Operator::from("contains".to_string()), Operator::Contains);
    }

    #[test]
    fn parses_symbolic_aliases() {
        assert_eq!(Operator::from("===".to_string()), Operator::Equals);
        assert_eq!(Operator::from(">".to_string()), Operator::GreaterThan);
        assert_eq!(Operator::from("<".to_string()), Operator::LessThan);
        assert_eq!(Operator::from("!==".to_string()), Operator::NotEquals);
    }

    #[test]
    fn keeps_unknown_text() {
        let op = Operator::from("matches".to_string());
        assert_eq!(op, Operator::Unknown("matches".to_string()));
        assert!(!op.is_known());
        assert_eq!(op.apply("a", "a"), None);
    }

    #[test]
    fn numeric_comparison_when_both_numeric() {
        // Lexicographically "10" < "9", numerically it is greater.
        assert_eq!(Operator::GreaterThan.apply("10", "9"), Some(true));
        assert_eq!(Operator::LessThan.apply("9", "10"), Some(true));
    }

    #[test]
    fn lexicographic_fallback_when_not_numeric() {
        assert_eq!(Operator::GreaterThan.apply("4.18.0", "3.10.0"), Some(true));
        assert_eq!(Operator::GreaterThan.apply("unlimited", "1000"), Some(true));
    }

    #[test]
    fn greater_than_is_strict() {
        assert_eq!(Operator::GreaterThan.apply("3", "3"), Some(false));
        assert_eq!(Operator::LessThan.apply("3", "3"), Some(false));
    }

    #[test]
    fn equals_is_case_sensitive() {
        assert_eq!(Operator::Equals.apply("Oracle", "oracle"), Some(false));
        assert_eq!(Operator::NotEquals.apply("Oracle", "oracle"), Some(true));
    }

    #[test]
    fn round_trips_through_serde() {
        let op: Operator = serde_json::from_str("\">\"").unwrap();
        assert_eq!(op, Operator::GreaterThan);
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"greaterThan\"");
    }
}
