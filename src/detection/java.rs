//! JVM property discovery.
//!
//! Java checks read their evidence from the JVM's system properties rather
//! than from a dedicated command each. The properties are discovered once
//! per run from `java -XshowSettings:properties -version`, which prints
//! lines such as `    java.version = 1.8.0_202` to stderr.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::checks::Observed;
use crate::shell::CommandRunner;

/// Command printing the JVM's system properties.
pub const JAVA_PROPERTIES_COMMAND: &str = "java -XshowSettings:properties -version 2>&1";

/// Derived property: `java.version` before the `_` (e.g. `1.8.0`).
pub const VERSION_MAJOR: &str = "java.version.major";

/// Derived property: `java.version` after the `_` (e.g. `202`).
pub const VERSION_UPDATE: &str = "java.version.update";

static PROPERTY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z][\w.]*)\s+=\s?(.*?)\s*$").unwrap());

/// System properties reported by the host JVM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaProperties {
    values: BTreeMap<String, String>,
}

impl JavaProperties {
    /// Run the JVM once and collect its properties.
    ///
    /// A missing JVM yields an empty set, so every property check fails as
    /// absent evidence.
    pub fn discover(runner: &mut dyn CommandRunner) -> Self {
        match runner.run_raw(JAVA_PROPERTIES_COMMAND) {
            Observed::Value(output) => {
                let props = Self::parse(&output);
                tracing::debug!(count = props.len(), "discovered JVM properties");
                props
            }
            Observed::Absent => {
                tracing::debug!("no JVM found");
                Self::default()
            }
        }
    }

    /// Parse `-XshowSettings:properties` output.
    pub fn parse(output: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in output.lines() {
            if let Some(caps) = PROPERTY_LINE.captures(line) {
                values.insert(caps[1].to_string(), caps[2].to_string());
            }
        }

        if let Some(version) = values.get("java.version").cloned() {
            let mut parts = version.splitn(2, '_');
            if let Some(major) = parts.next() {
                values.insert(VERSION_MAJOR.to_string(), major.to_string());
            }
            if let Some(update) = parts.next() {
                values.insert(VERSION_UPDATE.to_string(), update.to_string());
            }
        }

        Self { values }
    }

    /// Look up a property as check evidence.
    pub fn get(&self, name: &str) -> Observed {
        self.values
            .get(name)
            .filter(|v| !v.is_empty())
            .map(|v| Observed::Value(v.clone()))
            .unwrap_or(Observed::Absent)
    }

    /// Number of known properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no properties were discovered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
