//! hostcheck - Host environment prerequisite validation.
//!
//! hostcheck runs a declarative list of checks against the machine it runs
//! on (kernel settings, installed software, time synchronisation, the JVM),
//! rates each outcome GREEN, AMBER or RED, and records everything in a flat
//! report file.
//!
//! # Modules
//!
//! - [`checks`] - Check descriptors, evaluation and status folding
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and linting
//! - [`detection`] - Host OS and JVM property discovery
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report file writer
//! - [`runner`] - Validation run orchestration
//! - [`shell`] - Shell command execution
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::{evaluate, CheckDescriptor, Observed, Operator, Severity};
//!
//! let check = CheckDescriptor::new(
//!     "vm.swappiness",
//!     "sysctl -n vm.swappiness",
//!     Operator::Equals,
//!     "0",
//!     Severity::Amber,
//! );
//! let result = evaluate(&check, Observed::Value("60".into())).unwrap();
//! assert!(!result.passed);
//! assert_eq!(result.status(), Severity::Amber);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod report;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{HostcheckError, Result};
