//! Minimal leveled logger.
//!
//! Lines are written as `[LEVEL][timestamp] message` to stdout or stderr. A line is only
//! written when its level is as severe as, or more severe than, the configured threshold.
//! The threshold defaults to `Warn` and can be overridden with the `BATH_LOGGER_LEVEL`
//! environment variable (`0` for error up to `4` for trace).
//!
//! ```no_run
//! use bath_logger::{info, Severity};
//!
//! bath_logger::set_threshold(Severity::Info);
//! info!("x={}", 5).unwrap();
//! ```

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod level;
pub mod logger;
pub mod output;

use log::LevelFilter;
use std::fmt;
use std::io;

pub use crate::config::LEVEL_ENV_VAR;
pub use crate::level::{label_for_rank, ParseSeverityError, Severity};
pub use crate::logger::Logger;
pub use crate::output::OutputTarget;

/// Severity specific log function, as returned by `entry_point`.
pub type EntryPoint = fn(fmt::Arguments<'_>) -> io::Result<usize>;

const ENTRY_POINTS: [EntryPoint; 5] = [error, warn, info, debug, trace];

lazy_static! {
    static ref LOGGER: Logger = Logger::from_env();
}

/// The process wide logger. The environment override is read the first time it's used.
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Install the process wide logger as the `log` crate backend.
///
/// The facade's max level is lifted to `Trace` so the logger's own threshold, which can change
/// at runtime, decides what gets written.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(logger()).map(|()| log::set_max_level(LevelFilter::Trace))
}

pub fn threshold() -> Severity {
    LOGGER.threshold()
}

pub fn set_threshold(level: Severity) {
    LOGGER.set_threshold(level);
}

pub fn output_target() -> OutputTarget {
    LOGGER.output_target()
}

pub fn set_output_target(target: OutputTarget) {
    LOGGER.set_output_target(target);
}

pub fn reload_threshold_from_env() {
    LOGGER.reload_threshold_from_env();
}

pub fn log_at(level: Severity, args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.log_at(level, args)
}

pub fn error(args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.error(args)
}

pub fn warn(args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.warn(args)
}

pub fn info(args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.info(args)
}

pub fn debug(args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.debug(args)
}

pub fn trace(args: fmt::Arguments<'_>) -> io::Result<usize> {
    LOGGER.trace(args)
}

/// Return the log function of the process wide logger for a level.
pub fn entry_point(level: Severity) -> EntryPoint {
    entry_point_for_rank(level.rank())
}

/// Like `entry_point`, for a raw rank. Unknown ranks get the trace function.
pub fn entry_point_for_rank(rank: usize) -> EntryPoint {
    ENTRY_POINTS.get(rank).copied().unwrap_or(trace)
}

/// Log at a given level, on the process wide logger or on `logger: <expr>`.
///
/// Evaluates to the `io::Result<usize>` of `Logger::log_at`.
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log_at($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warn(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::trace(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::{entry_point, entry_point_for_rank, Logger, OutputTarget, Severity};

    #[test]
    fn macros_on_local_logger() {
        let logger = Logger::with_threshold(Severity::Info);
        logger.set_output_target(OutputTarget::Stderr);
        assert_eq!(crate::debug!(logger: logger, "x={}", 5).unwrap(), 0);
        assert!(crate::info!(logger: logger, "x={}", 5).unwrap() > 0);
        assert!(crate::warn!(logger: logger, "plain").unwrap() > 0);
        assert!(crate::error!(logger: logger, "{}", "e").unwrap() > 0);
        assert_eq!(crate::trace!(logger: logger, "t").unwrap(), 0);
        assert_eq!(
            crate::log_at!(logger: logger, Severity::Debug, "x={}", 5).unwrap(),
            0
        );
        assert!(crate::log_at!(logger: logger, Severity::Info, "x={}", 5).unwrap() > 0);
    }

    #[test]
    fn process_wide_logger() {
        // Only test in this binary that reconfigures the process wide logger
        super::set_output_target(OutputTarget::Stderr);
        assert_eq!(super::output_target(), OutputTarget::Stderr);

        super::set_threshold(Severity::Error);
        assert_eq!(super::threshold(), Severity::Error);
        assert_eq!(super::warn(format_args!("testing")).unwrap(), 0);
        assert_eq!(crate::warn!("testing").unwrap(), 0);
        assert!(super::error(format_args!("testing")).unwrap() > 0);

        // Each resolved entry point writes exactly when its own level passes the threshold
        for threshold in Severity::ALL {
            super::set_threshold(threshold);
            for level in Severity::ALL {
                let log = entry_point(level);
                let written = log(format_args!("testing")).unwrap() > 0;
                assert_eq!(
                    written,
                    level.passes(threshold),
                    "entry point for {:?} with threshold {:?}",
                    level,
                    threshold
                );
            }
        }

        super::set_threshold(Severity::Debug);
        assert_eq!(entry_point_for_rank(5)(format_args!("testing")).unwrap(), 0);
        assert_eq!(
            entry_point_for_rank(usize::MAX)(format_args!("testing")).unwrap(),
            0
        );
        assert!(entry_point_for_rank(3)(format_args!("testing")).unwrap() > 0);
        super::set_threshold(Severity::Trace);
        assert!(entry_point_for_rank(5)(format_args!("testing")).unwrap() > 0);
        assert!(crate::log_at!(Severity::Debug, "x={}", 5).unwrap() > 0);

        super::init().unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Trace);
        assert!(super::init().is_err());
    }
}
