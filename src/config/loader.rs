//! Configuration file discovery and loading.
//!
//! The check tree is read from `descriptions.json` in the working directory
//! unless a path is given on the command line or via `HOSTCHECK_CONFIG`.
//! Files ending in `.yml`/`.yaml` are parsed as YAML, everything else as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ValidationConfig;
use crate::error::{HostcheckError, Result};

/// Config file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "descriptions.json";

/// Resolve the config path: explicit override, else the default file in `cwd`.
pub fn resolve_config_path(config_override: Option<&Path>, cwd: &Path) -> PathBuf {
    match config_override {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    }
}

/// Load and parse a config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid.
pub fn load_config(path: &Path) -> Result<ValidationConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            anyhow::Error::new(e)
                .context(format!("failed to read {}", path.display()))
                .into()
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse config content, choosing the format from the path's extension.
///
/// # Arguments
///
/// * `content` - The document to parse
/// * `source_path` - Path for format selection and error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ValidationConfig> {
    let is_yaml = matches!(
        source_path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    );

    let parsed = if is_yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| HostcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })
}
