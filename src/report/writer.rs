//! Report file writer (flat `key = value` lines).

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checks::{CheckDescriptor, CheckResult};
use crate::error::{HostcheckError, Result};

/// Report file written in the working directory by default.
pub const DEFAULT_REPORT_FILE: &str = "validation.properties";

/// Status written for a check whose configuration could not be evaluated.
pub const ERROR_STATUS: &str = "ERROR";

/// Append-only record of every check outcome of a run.
///
/// Each check contributes two lines:
///
/// ```text
/// <storageKey>_status = <GREEN|AMBER|RED|ERROR>
/// <storageKey> = <value>
/// ```
#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Start a new, empty report at `path`, moving any previous report to
    /// `<path>.bak`.
    ///
    /// An older backup is replaced.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let backup = backup_path(&path);
            fs::rename(&path, &backup).map_err(|source| HostcheckError::ReportWrite {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(backup = %backup.display(), "rotated previous report");
        }
        File::create(&path).map_err(|source| HostcheckError::ReportWrite {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    /// Get the report path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the outcome of an evaluated check.
    pub fn record(&self, result: &CheckResult<'_>) -> Result<()> {
        self.append_pair(
            result.descriptor.storage_key(),
            result.status().as_str(),
            &result.reported,
        )
    }

    /// Append an error entry for a check that could not be evaluated.
    pub fn record_error(&self, descriptor: &CheckDescriptor, error: &HostcheckError) -> Result<()> {
        self.append_pair(descriptor.storage_key(), ERROR_STATUS, &error.to_string())
    }

    fn append_pair(&self, key: &str, status: &str, value: &str) -> Result<()> {
        let key = escape_line_breaks(key);
        let value = escape_line_breaks(value);
        let lines = format!("{key}_status = {status}\n{key} = {value}\n");

        // The handle is scoped to this call and closed on drop, error or not.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        file.write_all(lines.as_bytes())
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> HostcheckError {
        HostcheckError::ReportWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Keep an entry on one line: CR and LF are written as `\r` and `\n`.
fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

/// `<path>.bak` next to the report.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
