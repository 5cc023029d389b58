//! Check evaluation and status aggregation.
//!
//! This module holds the decision logic of a validation run:
//!
//! - [`descriptor`] - Declarative check descriptors
//! - [`severity`] - The ordered RAG severity
//! - [`operator`] - Comparison operators
//! - [`evaluator`] - Scalar check evaluation
//! - [`multi_value`] - Tab-separated triple checks
//! - [`aggregate`] - Folding outcomes into group and run verdicts
//! - [`time_sync`] - The short-circuiting time-sync composite
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::{evaluate, CheckDescriptor, Observed, Operator, Severity};
//!
//! let check = CheckDescriptor::new("jdk", "javac 2>&1", Operator::Contains, "Usage: javac", Severity::Red);
//! let result = evaluate(&check, Observed::Value("Usage: javac <options>".into())).unwrap();
//! assert!(result.passed);
//! assert_eq!(result.reported, "true");
//! ```

pub mod aggregate;
pub mod descriptor;
pub mod evaluator;
pub mod multi_value;
pub mod operator;
pub mod severity;
pub mod time_sync;

pub use aggregate::{fold, fold_group, Aggregate, GroupOutcome};
pub use descriptor::{CheckDescriptor, CheckShape, EvidenceSource, Expected};
pub use evaluator::{evaluate, CheckResult, Observed, ABSENT_VALUE};
pub use multi_value::{derive_thresholds, TripleMismatch};
pub use operator::Operator;
pub use severity::Severity;
pub use time_sync::{evaluate_time_sync, TimeSyncChecks, TimeSyncOutcome};
