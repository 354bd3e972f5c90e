//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConfigWrapper;

/// Error type for configuration loading.
///
/// Every variant is recoverable: the facade pairs each one with a fallback
/// logger installation, so a broken config degrades rather than aborts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("log configure file name is empty")]
    Missing,

    #[error("log configure file {0} suffix must be .yml")]
    ExtensionInvalid(String),

    #[error("read log configure file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse log configure file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load a logger configuration from a YAML file.
///
/// The file must carry a `.yml` extension. An empty path is treated as
/// "no configuration supplied" rather than an I/O error.
pub fn load_config(path: &Path) -> Result<ConfigWrapper, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Missing);
    }
    // Suffix check on the file name itself, so a bare ".yml" passes.
    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    if !file_name.ends_with(".yml") {
        return Err(ConfigError::ExtensionInvalid(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
