//! Validation run orchestration.

pub mod validation;

pub use validation::{ValidationRun, TIME_SYNC_HEADER};
