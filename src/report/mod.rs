//! Persisted validation report.

pub mod writer;

pub use writer::{backup_path, ReportWriter, DEFAULT_REPORT_FILE, ERROR_STATUS};
