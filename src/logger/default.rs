//! The default logger implementation: a four-sink tee.
//!
//! # Responsibilities
//! - Build the sink topology (three rolling files + console) from config
//! - Gate each sink with its own level predicate against the shared threshold
//! - Stamp records with the facade caller's file and line
//! - Flush every sink before a fatal exit
//!
//! # Design Decisions
//! - Sinks share one encoder configuration; routing differs only by predicate
//! - A sink that cannot be built is dropped from the topology; construction
//!   itself never fails
//! - Append errors are swallowed: a broken sink must not crash the caller

use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use log4rs::append::Append;

use crate::config::schema::{LogConfig, RollingConfig};
use crate::logger::level::{Level, LevelCell};
use crate::logger::{sinks, Logger, OpsLogger};

const TARGET: &str = "dubbo";

type Predicate = Box<dyn Fn(Level) -> bool + Send + Sync>;

struct Sink {
    appender: Box<dyn Append>,
    enabled: Predicate,
}

/// Logger installed by `init_log` and friends.
///
/// Holds the dynamic level threshold shared by every sink predicate, which
/// makes it level-adjustable through [`OpsLogger`].
pub struct DefaultLogger {
    sinks: Vec<Sink>,
    dynamic_level: Arc<LevelCell>,
}

impl DefaultLogger {
    /// Build the full four-sink topology from resolved configuration.
    pub fn new(conf: &LogConfig, rolling: &RollingConfig) -> Self {
        let min = Arc::new(LevelCell::new(conf.level));
        let mut topology: Vec<Sink> = Vec::with_capacity(4);

        if let Some(appender) =
            sinks::rolling_appender(&rolling.info_filename, rolling, sinks::encoder(conf))
        {
            topology.push(Sink {
                appender: Box::new(appender),
                enabled: info_gate(&min),
            });
        }
        if let Some(appender) =
            sinks::rolling_appender(&rolling.warn_filename, rolling, sinks::encoder(conf))
        {
            topology.push(Sink {
                appender: Box::new(appender),
                enabled: warn_gate(&min),
            });
        }
        if let Some(appender) =
            sinks::rolling_appender(&rolling.error_filename, rolling, sinks::encoder(conf))
        {
            topology.push(Sink {
                appender: Box::new(appender),
                enabled: error_gate(&min),
            });
        }
        topology.push(Sink {
            appender: Box::new(sinks::console_appender(sinks::encoder(conf))),
            enabled: console_gate(&min),
        });

        Self {
            sinks: topology,
            dynamic_level: min,
        }
    }

    /// Console-only logger at debug level.
    ///
    /// Installed on every configuration failure so logging stays usable.
    pub fn fallback() -> Self {
        let conf = LogConfig::default();
        let min = Arc::new(LevelCell::new(Level::Debug));
        let console = Sink {
            appender: Box::new(sinks::console_appender(sinks::encoder(&conf))),
            enabled: console_gate(&min),
        };
        Self {
            sinks: vec![console],
            dynamic_level: min,
        }
    }

    #[cfg(test)]
    fn from_parts(sinks: Vec<Sink>, dynamic_level: Arc<LevelCell>) -> Self {
        Self {
            sinks,
            dynamic_level,
        }
    }

    #[track_caller]
    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit_at(level, args, Some(caller.file()), Some(caller.line()));
    }

    fn emit_at(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        file: Option<&str>,
        line: Option<u32>,
    ) {
        let record = log::Record::builder()
            .args(args)
            .level(level.to_log_level())
            .target(TARGET)
            .file(file)
            .line(line)
            .build();
        for sink in &self.sinks {
            if (sink.enabled)(level) {
                let _ = sink.appender.append(&record);
            }
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.appender.flush();
        }
    }
}

impl Logger for DefaultLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Fatal, args);
        self.flush();
        process::exit(1);
    }

    fn forward(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        file: Option<&str>,
        line: Option<u32>,
    ) {
        self.emit_at(level, args, file, line);
    }

    fn as_ops(&self) -> Option<&dyn OpsLogger> {
        Some(self)
    }
}

impl OpsLogger for DefaultLogger {
    fn set_logger_level(&self, level: &str) {
        // unparseable names leave the threshold untouched
        if let Ok(level) = level.parse::<Level>() {
            self.dynamic_level.set(level);
        }
    }
}

fn info_gate(min: &Arc<LevelCell>) -> Predicate {
    let min = Arc::clone(min);
    Box::new(move |level| level == Level::Info && Level::Info >= min.get())
}

fn warn_gate(min: &Arc<LevelCell>) -> Predicate {
    let min = Arc::clone(min);
    Box::new(move |level| level == Level::Warn && Level::Warn >= min.get())
}

// Gated on the warn threshold, not the record's own level.
fn error_gate(min: &Arc<LevelCell>) -> Predicate {
    let min = Arc::clone(min);
    Box::new(move |level| level > Level::Warn && Level::Warn >= min.get())
}

fn console_gate(min: &Arc<LevelCell>) -> Predicate {
    let min = Arc::clone(min);
    Box::new(move |level| level >= min.get())
}
