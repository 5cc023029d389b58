//! Check descriptors as declared in the configuration.

use serde::{Deserialize, Deserializer, Serialize};

use super::operator::Operator;
use super::severity::Severity;

/// One declarative assertion about the host environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDescriptor {
    /// Human-readable check name.
    pub name: String,

    /// Platform shell command producing the observed value.
    #[serde(default)]
    pub command: String,

    /// Discovered JVM property to read instead of running a command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Comparison between observed and expected value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,

    /// Comparison operand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Expected>,

    /// Severity assigned when the check fails.
    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Guidance shown when the check fails.
    #[serde(default)]
    pub description: String,

    /// Key under which the outcome is written to the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,

    /// Whether the command yields one value or a tab-separated triple.
    #[serde(default)]
    pub shape: CheckShape,
}

fn default_severity() -> Severity {
    Severity::Red
}

/// Shape of the value a check's command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckShape {
    #[default]
    Scalar,
    Triple,
}

/// Expected operand of a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    /// Triple thresholds derived from a single base number.
    Derived {
        #[serde(rename = "derivedFrom")]
        derived_from: f64,
    },
    /// Literal operand; numbers are kept in their textual form.
    Literal(#[serde(deserialize_with = "string_or_number")] String),
}

impl Expected {
    /// Textual form used for scalar comparison and display.
    pub fn as_text(&self) -> String {
        match self {
            Expected::Derived { derived_from } => format!("derivedFrom {}", derived_from),
            Expected::Literal(text) => text.clone(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Bool(b) => b.to_string(),
    })
}

/// Where a check gets its evidence from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceSource<'a> {
    /// A discovered JVM property.
    Property(&'a str),
    /// A platform shell command.
    Command(&'a str),
    /// Nothing applicable on this platform.
    None,
}

impl CheckDescriptor {
    /// Create a scalar descriptor.
    pub fn new(
        name: &str,
        command: &str,
        operator: Operator,
        expected: &str,
        severity: Severity,
    ) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            property: None,
            operator: Some(operator),
            expected: Some(Expected::Literal(expected.to_string())),
            severity,
            description: String::new(),
            storage_key: None,
            shape: CheckShape::Scalar,
        }
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = Some(key.to_string());
        self
    }

    /// Set the failure guidance.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Read evidence from a JVM property instead of a command.
    pub fn with_property(mut self, property: &str) -> Self {
        self.property = Some(property.to_string());
        self
    }

    /// Turn this into a triple check with the given expectation.
    pub fn with_triple(mut self, expected: Expected) -> Self {
        self.shape = CheckShape::Triple;
        self.expected = Some(expected);
        self
    }

    /// Report key, falling back to the check name.
    pub fn storage_key(&self) -> &str {
        self.storage_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// Resolve where this check's observed value comes from.
    pub fn source(&self) -> EvidenceSource<'_> {
        if let Some(property) = self.property.as_deref() {
            return EvidenceSource::Property(property);
        }
        let command = self.command.trim();
        if command.is_empty() {
            EvidenceSource::None
        } else {
            EvidenceSource::Command(command)
        }
    }

    /// Expected operand as display text.
    pub fn expected_text(&self) -> String {
        self.expected
            .as_ref()
            .map(Expected::as_text)
            .unwrap_or_default()
    }
}
