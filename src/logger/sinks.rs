//! Sink construction: console and rolling-file appenders.
//!
//! Rotation and size/count retention are delegated to the logging engine's
//! rolling-file policy; age-based retention is a sweep over rotated copies
//! performed when the topology is built.

use std::path::Path;
use std::time::{Duration, SystemTime};

use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::encode::json::JsonEncoder;
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::Encode;

use crate::config::schema::{Encoding, LogConfig, RollingConfig};

/// One record layout shared by every sink.
const RECORD_PATTERN: &str = "[{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {f}:{L}] {m}{n}";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Build the encoder described by the resolved engine settings.
pub(crate) fn encoder(conf: &LogConfig) -> Box<dyn Encode> {
    match conf.encoding {
        Encoding::Json => Box::new(JsonEncoder::new()),
        Encoding::Console => Box::new(PatternEncoder::new(RECORD_PATTERN)),
    }
}

/// Console sink writing to standard output.
pub(crate) fn console_appender(encoder: Box<dyn Encode>) -> ConsoleAppender {
    ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(encoder)
        .build()
}

/// Rolling-file sink for one log file.
///
/// Rotates once the file exceeds `maxSize` MB, keeps `maxBackups` rotated
/// copies (gzipped when `compress` is set), and prunes copies older than
/// `maxAge` days. Returns `None` when the appender cannot be built; a broken
/// file sink degrades the topology instead of failing initialization.
pub(crate) fn rolling_appender(
    filename: &str,
    rolling: &RollingConfig,
    encoder: Box<dyn Encode>,
) -> Option<RollingFileAppender> {
    if let Err(e) = std::fs::create_dir_all(&rolling.log_file_path) {
        eprintln!("dubbo-logger: log directory {}: {}", rolling.log_file_path, e);
        return None;
    }
    let path = Path::new(&rolling.log_file_path).join(filename);

    if rolling.max_age > 0 {
        prune_aged_backups(Path::new(&rolling.log_file_path), filename, rolling.max_age);
    }

    let mut roll_pattern = format!("{}.{{}}", path.display());
    if rolling.compress {
        roll_pattern.push_str(".gz");
    }
    let roller = match FixedWindowRoller::builder().build(&roll_pattern, rolling.max_backups) {
        Ok(roller) => roller,
        Err(e) => {
            eprintln!("dubbo-logger: roller for {}: {}", path.display(), e);
            return None;
        }
    };

    let trigger = SizeTrigger::new(rolling.max_size.saturating_mul(1024 * 1024));
    let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

    match RollingFileAppender::builder()
        .encoder(encoder)
        .build(&path, Box::new(policy))
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("dubbo-logger: file sink {}: {}", path.display(), e);
            None
        }
    }
}

/// Remove rotated copies of `filename` older than `max_age` days.
///
/// The active file itself is never touched; rotated copies carry a dotted
/// suffix (`name.log.0`, `name.log.1.gz`, ...).
fn prune_aged_backups(dir: &Path, filename: &str, max_age: u64) {
    let window = Duration::from_secs(max_age.saturating_mul(SECS_PER_DAY));
    let Some(cutoff) = SystemTime::now().checked_sub(window) else {
        return;
    };
    let prefix = format!("{filename}.");

    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with(&prefix) {
            continue;
        }
        let expired = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .map(|modified| modified < cutoff)
            .unwrap_or(false);
        if expired {
            let _ = std::fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_rolling_appender_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let rolling = RollingConfig {
            log_file_path: dir.path().join("logs").display().to_string(),
            ..RollingConfig::default()
        };
        let conf = LogConfig::default();

        let appender = rolling_appender("dubbo-info.log", &rolling, encoder(&conf));
        assert!(appender.is_some());
        assert!(dir.path().join("logs").join("dubbo-info.log").exists());
    }

    #[test]
    fn test_prune_keeps_active_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dubbo-info.log"), b"active").unwrap();
        fs::write(dir.path().join("dubbo-info.log.0"), b"rotated").unwrap();
        fs::write(dir.path().join("unrelated.log"), b"other").unwrap();

        // a zero-day cutoff expires every already-written rotated copy
        std::thread::sleep(std::time::Duration::from_millis(20));
        prune_aged_backups(dir.path(), "dubbo-info.log", 0);

        assert!(dir.path().join("dubbo-info.log").exists());
        assert!(dir.path().join("unrelated.log").exists());
        assert!(!dir.path().join("dubbo-info.log.0").exists());
    }

    #[test]
    fn test_extreme_retention_limits_still_build() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dubbo-info.log.0"), b"rotated").unwrap();
        let rolling = RollingConfig {
            log_file_path: dir.path().display().to_string(),
            max_size: u64::MAX,
            max_age: u64::MAX,
            ..RollingConfig::default()
        };
        let conf = LogConfig::default();

        let appender = rolling_appender("dubbo-info.log", &rolling, encoder(&conf));
        assert!(appender.is_some());
        // a cutoff older than the epoch expires nothing
        assert!(dir.path().join("dubbo-info.log.0").exists());
    }
}
