//! Bridge into the `log` ecosystem.
//!
//! The RPC transport and other networking dependencies emit through the
//! `log` facade. Registering a shim that reads the active-logger slot routes
//! those records through the same sink topology as the facade's own macros;
//! because the shim dereferences the slot on every record, later `set_logger`
//! calls are observed without re-registration.

use std::sync::Once;

use log::{Log, Metadata, Record};

use crate::logger::{self, Level};

struct FacadeBridge;

impl Log for FacadeBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // sink predicates do the filtering
        true
    }

    fn log(&self, record: &Record) {
        let level = match record.level() {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        };
        // forward the record's own call site rather than stamping ours
        logger::get_logger().forward(level, *record.args(), record.file(), record.line());
    }

    fn flush(&self) {}
}

static BRIDGE: FacadeBridge = FacadeBridge;
static INSTALL: Once = Once::new();

/// Point the `log` global at the active-logger slot. Idempotent; quietly
/// yields if the host process already claimed the `log` global.
pub(crate) fn install() {
    INSTALL.call_once(|| {
        if log::set_logger(&BRIDGE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::logger::Logger;

    #[derive(Clone, Default)]
    struct Recorded(Arc<Mutex<Vec<(Level, String, Option<(String, u32)>)>>>);

    impl Recorded {
        fn push(&self, level: Level, args: fmt::Arguments<'_>) {
            self.0.lock().unwrap().push((level, args.to_string(), None));
        }
    }

    impl Logger for Recorded {
        fn debugf(&self, args: fmt::Arguments<'_>) {
            self.push(Level::Debug, args);
        }
        fn infof(&self, args: fmt::Arguments<'_>) {
            self.push(Level::Info, args);
        }
        fn warnf(&self, args: fmt::Arguments<'_>) {
            self.push(Level::Warn, args);
        }
        fn errorf(&self, args: fmt::Arguments<'_>) {
            self.push(Level::Error, args);
        }
        fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
            unreachable!("fatal record in test: {}", args)
        }
        fn forward(
            &self,
            level: Level,
            args: fmt::Arguments<'_>,
            file: Option<&str>,
            line: Option<u32>,
        ) {
            let origin = file.zip(line).map(|(file, line)| (file.to_string(), line));
            self.0.lock().unwrap().push((level, args.to_string(), origin));
        }
    }

    #[test]
    fn test_bridge_routes_log_records_with_origin() {
        install();
        let sink = Recorded::default();
        crate::logger::set_logger(sink.clone());

        log::info!("bridged record");

        let entries = sink.0.lock().unwrap().clone();
        let entry = entries
            .iter()
            .find(|(_, msg, _)| msg.as_str() == "bridged record")
            .expect("record reached the active logger");
        assert_eq!(entry.0, Level::Info);
        // the record keeps its own call site, not the bridge's
        let (file, line) = entry.2.as_ref().expect("origin survives the bridge");
        assert!(file.ends_with("bridge.rs"), "origin file was {file}");
        assert!(*line > 0);
    }
}
