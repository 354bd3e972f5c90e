//! Pluggable leveled logging for the RPC runtime.
//!
//! # Architecture Overview
//!
//! ```text
//! YAML config file
//!     → config::loader (parse & deserialize)
//!     → ConfigWrapper (LogConfig + RollingConfig, all fields defaulted)
//!     → logger::DefaultLogger (four sinks, one shared encoder config)
//!         ├── info file   (rolling, fires only at info)
//!         ├── warn file   (rolling, fires only at warn)
//!         ├── error file  (rolling, fires above warn)
//!         └── console     (stdout, fires at or above the minimum level)
//!     → atomic install into the process-wide slot
//!     → `log` bridge (networking dependencies observe the same topology)
//! ```
//!
//! The active logger lives behind an atomic slot and can be replaced
//! wholesale at runtime with any [`Logger`] backend. Backends that also
//! implement [`OpsLogger`] keep their level adjustable through
//! [`set_logger_level`]; installing a bare backend loses that capability
//! until a logger offering it is reinstalled.
//!
//! Configuration failures never leave the process without a logger: every
//! error path of [`init_log`] installs a console-only debug fallback before
//! returning the error.

pub mod bridge;
pub mod config;
pub mod logger;

mod macros;

pub use config::loader::ConfigError;
pub use config::schema::{ConfigWrapper, Encoding, LogConfig, RollingConfig};
pub use logger::{
    ensure_initialized, get_logger, init_log, init_logger, init_logger_with_rolling, set_logger,
    set_logger_level, DefaultLogger, Level, Logger, OpsLogger, APP_LOG_CONF_FILE,
};
