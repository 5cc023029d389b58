//! Configuration linting.
//!
//! Problems found here are warnings: the run still goes ahead, and each
//! faulty check is reported as an error entry when it is evaluated.
//! - Operators must be recognized
//! - Checks need an operator, an expected value, and a source of evidence
//! - Triple checks need three literal values or a derivation base
//! - Storage keys must be unique

use std::collections::HashSet;
use std::fmt;

use crate::checks::{CheckDescriptor, CheckShape, EvidenceSource, Expected};
use crate::config::schema::ValidationConfig;

/// A suspicious descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Rule identifier
    pub rule: &'static str,
    /// Check name
    pub check: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.check, self.message)
    }
}

/// Lint a configuration, collecting every issue.
///
/// Storage keys only need to be unique within one platform's run, which
/// also includes the shared Java group.
pub fn validate(config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = config
        .all_checks()
        .into_iter()
        .flat_map(validate_check)
        .collect();

    for platform in [&config.linux, &config.windows].into_iter().flatten() {
        let java = config.java.iter().flat_map(|g| g.checks.iter());
        let mut keys = HashSet::new();
        for check in platform.all_checks().into_iter().chain(java) {
            if !keys.insert(check.storage_key()) {
                issues.push(issue(
                    "duplicate-key",
                    check,
                    format!("storage key '{}' is used more than once", check.storage_key()),
                ));
            }
        }
    }

    issues
}

/// Lint a single descriptor.
pub fn validate_check(check: &CheckDescriptor) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match &check.operator {
        None => issues.push(issue("missing-operator", check, "no operator".to_string())),
        Some(op) if !op.is_known() => issues.push(issue(
            "unknown-operator",
            check,
            format!("operator '{}' is not recognized", op),
        )),
        Some(_) => {}
    }

    match (&check.expected, check.shape) {
        (None, _) => issues.push(issue(
            "missing-expected",
            check,
            "no expected value".to_string(),
        )),
        (Some(Expected::Literal(text)), CheckShape::Triple)
            if text.split_whitespace().count() != 3 =>
        {
            issues.push(issue(
                "malformed-triple",
                check,
                format!("expected three values, got '{}'", text),
            ))
        }
        (Some(Expected::Derived { .. }), CheckShape::Scalar) => issues.push(issue(
            "derived-scalar",
            check,
            "derivedFrom only applies to triple checks".to_string(),
        )),
        _ => {}
    }

    if check.source() == EvidenceSource::None {
        issues.push(issue(
            "no-source",
            check,
            "neither command nor property given; check will always fail".to_string(),
        ));
    }

    issues
}

fn issue(rule: &'static str, check: &CheckDescriptor, message: String) -> ValidationIssue {
    ValidationIssue {
        rule,
        check: check.name.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Operator, Severity};
    use crate::config::schema::{CheckGroup, PlatformChecks};

    fn check(name: &str) -> CheckDescriptor {
        CheckDescriptor::new(name, "echo 1", Operator::Equals, "1", Severity::Amber)
    }

    fn config_with(checks: Vec<CheckDescriptor>) -> ValidationConfig {
        ValidationConfig {
            linux: Some(PlatformChecks {
                groups: vec![CheckGroup {
                    name: "group".to_string(),
                    checks,
                }],
                time_sync: None,
            }),
            ..Default::default()
        }
    }

    fn rules(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.rule).collect()
    }

    #[test]
    fn valid_check_has_no_issues() {
        assert!(validate_check(&check("ok")).is_empty());
    }

    #[test]
    fn flags_unknown_operator() {
        let mut c = check("x");
        c.operator = Some(Operator::Unknown("~".to_string()));
        assert_eq!(rules(&validate_check(&c)), vec!["unknown-operator"]);
    }

    #[test]
    fn flags_missing_fields() {
        let mut c = check("x");
        c.operator = None;
        c.expected = None;
        c.command = String::new();
        assert_eq!(
            rules(&validate_check(&c)),
            vec!["missing-operator", "missing-expected", "no-source"]
        );
    }

    #[test]
    fn flags_malformed_triple() {
        let c = check("tcp_rmem").with_triple(Expected::Literal("4096 16384".to_string()));
        assert_eq!(rules(&validate_check(&c)), vec!["malformed-triple"]);
    }

    #[test]
    fn flags_derived_scalar() {
        let mut c = check("x");
        c.expected = Some(Expected::Derived { derived_from: 1.0 });
        assert_eq!(rules(&validate_check(&c)), vec!["derived-scalar"]);
    }

    #[test]
    fn flags_duplicate_storage_keys() {
        let config = config_with(vec![
            check("a").with_storage_key("same"),
            check("b").with_storage_key("same"),
        ]);
        assert_eq!(rules(&validate(&config)), vec!["duplicate-key"]);
    }

    #[test]
    fn same_key_on_two_platforms_is_fine() {
        let mut config = config_with(vec![check("a")]);
        config.windows = config.linux.clone();
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn issue_display_includes_rule_and_check() {
        let mut c = check("swappiness");
        c.operator = None;
        let text = validate_check(&c)[0].to_string();
        assert!(text.contains("missing-operator"));
        assert!(text.contains("swappiness"));
    }
}
