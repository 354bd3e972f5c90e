//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from YAML config files.
//! Field names on disk are camelCase; every field carries a default so an
//! empty document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::logger::Level;

/// Root of the on-disk YAML document.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigWrapper {
    /// Structured-logging engine settings.
    pub log_config: LogConfig,

    /// Rolling-file settings handed to the rotation engine.
    pub rolling: RollingConfig,
}

/// Structured-logging engine settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Minimum level shared by every sink's enablement predicate.
    pub level: Level,

    /// Record format shared by all four sinks.
    pub encoding: Encoding,

    /// Output paths of the engine's own diagnostics.
    pub output_paths: Vec<String>,

    /// Error-output paths of the engine's own diagnostics.
    pub error_output_paths: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            encoding: Encoding::Console,
            output_paths: vec!["stderr".to_string()],
            error_output_paths: vec!["stderr".to_string()],
        }
    }
}

/// Record encoding applied uniformly to every sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Console,
    Json,
}

/// Rolling-file settings: where log files live and when they rotate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollingConfig {
    /// Directory holding the three log files.
    pub log_file_path: String,

    /// File receiving records above warn.
    pub error_filename: String,

    /// File receiving warn records.
    pub warn_filename: String,

    /// File receiving info records.
    pub info_filename: String,

    /// Size in MB at which a file is rotated.
    pub max_size: u64,

    /// Rotated copies to keep.
    pub max_backups: u32,

    /// Rotated copies older than this many days are pruned.
    pub max_age: u64,

    /// Gzip rotated copies.
    pub compress: bool,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            log_file_path: "./logs".to_string(),
            error_filename: "dubbo-error.log".to_string(),
            warn_filename: "dubbo-warn.log".to_string(),
            info_filename: "dubbo-info.log".to_string(),
            max_size: 30,
            max_backups: 1,
            max_age: 3,
            compress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_defaults() {
        let rolling = RollingConfig::default();
        assert_eq!(rolling.log_file_path, "./logs");
        assert_eq!(rolling.error_filename, "dubbo-error.log");
        assert_eq!(rolling.warn_filename, "dubbo-warn.log");
        assert_eq!(rolling.info_filename, "dubbo-info.log");
        assert_eq!(rolling.max_size, 30);
        assert_eq!(rolling.max_backups, 1);
        assert_eq!(rolling.max_age, 3);
        assert!(!rolling.compress);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let wrapper: ConfigWrapper = serde_yaml::from_str("{}").unwrap();
        assert_eq!(wrapper.log_config.level, Level::Debug);
        assert_eq!(wrapper.log_config.encoding, Encoding::Console);
        assert_eq!(wrapper.rolling, RollingConfig::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let yaml = r#"
logConfig:
  level: info
  encoding: json
rolling:
  logFilePath: /var/log/dubbo
  maxSize: 128
  maxBackups: 5
  compress: true
"#;
        let wrapper: ConfigWrapper = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(wrapper.log_config.level, Level::Info);
        assert_eq!(wrapper.log_config.encoding, Encoding::Json);
        assert_eq!(wrapper.rolling.log_file_path, "/var/log/dubbo");
        assert_eq!(wrapper.rolling.max_size, 128);
        assert_eq!(wrapper.rolling.max_backups, 5);
        assert!(wrapper.rolling.compress);
        // untouched keys keep their defaults
        assert_eq!(wrapper.rolling.warn_filename, "dubbo-warn.log");
        assert_eq!(wrapper.rolling.max_age, 3);
    }
}
