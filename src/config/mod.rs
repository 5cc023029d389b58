//! Configuration loading, parsing, and validation for hostcheck.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Linting in [`validator`]
//!
//! # Example
//!
//! ```
//! use hostcheck::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("descriptions.json");
//! fs::write(&path, r#"{ "linux": { "groups": [] } }"#).unwrap();
//!
//! let config = load_config(&path).unwrap();
//! assert!(validate(&config).is_empty());
//! assert!(config.linux.is_some());
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, parse_config, resolve_config_path, DEFAULT_CONFIG_FILE};
pub use schema::{CheckGroup, PlatformChecks, ValidationConfig};
pub use validator::{validate, validate_check, ValidationIssue};
