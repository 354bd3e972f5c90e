//! Leveled logging macros delegating to the active logger.
//!
//! One macro per level covers both the plain and the formatted form:
//! `info!("ready")` and `info!("ready in {}ms", ms)` go through the same
//! path. `fatal!` terminates the process after the record is written.
//!
//! Calls are fully qualified so callers need no trait imports.

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {{
        let __active = $crate::logger::get_logger();
        $crate::logger::Logger::debugf(&**__active, format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {{
        let __active = $crate::logger::get_logger();
        $crate::logger::Logger::infof(&**__active, format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {{
        let __active = $crate::logger::get_logger();
        $crate::logger::Logger::warnf(&**__active, format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {{
        let __active = $crate::logger::get_logger();
        $crate::logger::Logger::errorf(&**__active, format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        let __active = $crate::logger::get_logger();
        $crate::logger::Logger::fatalf(&**__active, format_args!($($arg)+))
    }};
}
