//! The logger facade: capability traits, the process-wide slot, and
//! installation entry points.
//!
//! # Responsibilities
//! - Hold the active logger behind an atomic, hot-swappable slot
//! - Initialize the sink topology from a YAML config file
//! - Expose runtime level adjustment as an optional backend capability
//! - Propagate every install into the `log` bridge
//!
//! # Design Decisions
//! - `Init`/`Set`/`Get` are the only mutators of the slot; no other module
//!   touches it
//! - Replacement is wholesale: a new backend is built fully before the swap,
//!   so readers never observe a partially-constructed logger
//! - Initialization failure degrades to a console-only fallback instead of
//!   aborting

mod default;
mod level;
mod sinks;

pub use default::DefaultLogger;
pub use level::{Level, LevelCell, ParseLevelError};

use std::env;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Once};

use arc_swap::ArcSwap;
use clap::Parser;
use once_cell::sync::Lazy;

use crate::bridge;
use crate::config::loader::{self, ConfigError};
use crate::config::schema::{LogConfig, RollingConfig};

/// Environment variable naming the default configuration file.
pub const APP_LOG_CONF_FILE: &str = "APP_LOG_CONF_FILE";

/// Capability interface satisfied by every installable logging backend.
///
/// The `*f` methods are the formatted variants; the plain methods default to
/// delegating into them. `fatal`/`fatalf` must terminate the process after
/// the record is durably written, which is why they return `!`.
pub trait Logger: Send + Sync {
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;

    #[track_caller]
    fn debug(&self, msg: &str) {
        self.debugf(format_args!("{}", msg));
    }
    #[track_caller]
    fn info(&self, msg: &str) {
        self.infof(format_args!("{}", msg));
    }
    #[track_caller]
    fn warn(&self, msg: &str) {
        self.warnf(format_args!("{}", msg));
    }
    #[track_caller]
    fn error(&self, msg: &str) {
        self.errorf(format_args!("{}", msg));
    }
    #[track_caller]
    fn fatal(&self, msg: &str) -> ! {
        self.fatalf(format_args!("{}", msg));
    }

    /// Route a record that already carries its call site, as records arriving
    /// through the `log` bridge do. The default drops the origin and delegates
    /// to the leveled methods; backends that stamp call sites override it.
    fn forward(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        file: Option<&str>,
        line: Option<u32>,
    ) {
        let _ = (file, line);
        match level {
            Level::Debug => self.debugf(args),
            Level::Info => self.infof(args),
            Level::Warn => self.warnf(args),
            Level::Error | Level::Fatal => self.errorf(args),
        }
    }

    /// Runtime level adjustment is optional; backends opt in by returning
    /// themselves here. Checked at call time, never via inheritance.
    fn as_ops(&self) -> Option<&dyn OpsLogger> {
        None
    }
}

/// Optional capability: backends whose level threshold can be adjusted in
/// place. Unparseable level names are silently ignored.
pub trait OpsLogger: Logger {
    fn set_logger_level(&self, level: &str);
}

static ACTIVE: Lazy<ArcSwap<Box<dyn Logger>>> =
    Lazy::new(|| ArcSwap::from_pointee(Box::new(DefaultLogger::fallback()) as Box<dyn Logger>));

/// Initialize the facade from a YAML configuration file.
///
/// Every failure still installs a console-only debug fallback, so logging
/// remains usable whether or not the returned error is acted upon.
pub fn init_log(path: &str) -> Result<(), ConfigError> {
    match loader::load_config(Path::new(path)) {
        Ok(wrapper) => {
            init_logger_with_rolling(Some(wrapper.log_config), Some(wrapper.rolling));
            Ok(())
        }
        Err(e) => {
            set_logger(DefaultLogger::fallback());
            Err(e)
        }
    }
}

/// Build and install the four-sink topology.
///
/// Absent inputs resolve to defaults; malformed inputs degrade rather than
/// error, so this operation cannot fail.
pub fn init_logger_with_rolling(conf: Option<LogConfig>, rolling: Option<RollingConfig>) {
    let conf = conf.unwrap_or_default();
    let rolling = rolling.unwrap_or_default();
    set_logger(DefaultLogger::new(&conf, &rolling));
}

/// Build and install the topology with default rolling settings.
pub fn init_logger(conf: Option<LogConfig>) {
    init_logger_with_rolling(conf, None);
}

/// Install `logger` as the process-wide active logger.
///
/// Unconditional: no validation, no failure mode. The `log` bridge observes
/// the replacement immediately.
pub fn set_logger(logger: impl Logger + 'static) {
    ACTIVE.store(Arc::new(Box::new(logger) as Box<dyn Logger>));
    bridge::install();
}

/// The currently installed logger.
pub fn get_logger() -> Arc<Box<dyn Logger>> {
    ACTIVE.load_full()
}

/// Adjust the active logger's level threshold by name.
///
/// Returns true when the active backend offers the level-adjustment
/// capability (even if `level` fails to parse, which leaves the threshold
/// unchanged), false when it does not.
pub fn set_logger_level(level: &str) -> bool {
    let active = ACTIVE.load();
    match active.as_ops() {
        Some(ops) => {
            ops.set_logger_level(level);
            true
        }
        None => false,
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "log",
    ignore_errors = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct LogArgs {
    /// Path to the logger configuration file.
    #[arg(long = "log-conf")]
    log_conf: Option<String>,
}

static INIT: Once = Once::new();

/// One-shot process-start initialization.
///
/// Resolves the configuration path from the `--log-conf` flag, falling back
/// to the `APP_LOG_CONF_FILE` environment variable. Unrecognized process
/// arguments are left unconsumed. A failure only produces a best-effort
/// warning through the fallback logger; it never aborts. Subsequent calls
/// are no-ops.
pub fn ensure_initialized() {
    INIT.call_once(|| {
        let args = LogArgs::try_parse_from(env::args()).unwrap_or_default();
        let path = args
            .log_conf
            .or_else(|| env::var(APP_LOG_CONF_FILE).ok())
            .unwrap_or_default();
        if let Err(e) = init_log(&path) {
            crate::warn!("ensure_initialized: {}", e);
        }
    });
}
