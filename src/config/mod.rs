//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (extension check, read, deserialize)
//!     → ConfigWrapper (logConfig + rolling, immutable)
//!     → logger::init_logger_with_rolling (sink topology)
//!
//! On any load failure:
//!     loader returns the error
//!     → facade installs the console-only fallback logger
//!     → caller decides whether the error matters
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reinitialization
//! - All fields have defaults to allow minimal (or empty) configs
//! - Loading is one-shot and synchronous; no watching, no retries

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ConfigWrapper, Encoding, LogConfig, RollingConfig};
