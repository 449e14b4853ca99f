use chrono::{Local, SecondsFormat};
use log::{Metadata, Record};
use std::fmt;
#[cfg(unix)]
use std::fs::File;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::fd::AsFd;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::config::{self, DEFAULT_THRESHOLD};
use crate::level::Severity;
use crate::output::OutputTarget;

/// Leveled logger state: the current threshold and the stream lines are written to.
///
/// Both fields are atomics so a `Logger` can be shared between threads and reconfigured while
/// other threads are logging. Changes are visible to every following call through the same
/// instance.
#[derive(Debug)]
pub struct Logger {
    threshold: AtomicU8,
    target: AtomicU8,
}

impl Logger {
    /// Logger with the default threshold (`Warn`) writing to stdout. The environment is not read.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: Severity) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.rank() as u8),
            target: AtomicU8::new(OutputTarget::default().as_u8()),
        }
    }

    /// Logger with the default configuration, overridden by `BATH_LOGGER_LEVEL` when it holds a
    /// valid rank.
    pub fn from_env() -> Self {
        let logger = Self::new();
        logger.reload_threshold_from_env();
        logger
    }

    pub fn threshold(&self) -> Severity {
        Severity::from_rank_lossy(self.threshold.load(Ordering::Relaxed) as usize)
    }

    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level.rank() as u8, Ordering::Relaxed);
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_u8(self.target.load(Ordering::Relaxed))
    }

    pub fn set_output_target(&self, target: OutputTarget) {
        self.target.store(target.as_u8(), Ordering::Relaxed);
    }

    /// Read `BATH_LOGGER_LEVEL` again. Invalid or missing values leave the threshold as is.
    pub fn reload_threshold_from_env(&self) {
        if let Some(level) = config::threshold_from_env() {
            self.set_threshold(level);
        }
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        level.passes(self.threshold())
    }

    /// Write a log line at the given level to the current output target.
    ///
    /// Returns `Ok(0)` without writing anything when the level doesn't pass the threshold.
    /// Otherwise returns the number of bytes of the written line, or the error of the write.
    pub fn log_at(&self, level: Severity, args: fmt::Arguments<'_>) -> io::Result<usize> {
        if !self.is_enabled(level) {
            return Ok(0);
        }
        let line = format_line(level, &current_timestamp(), args);
        write_line(self.output_target(), &line)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.log_at(Severity::Error, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.log_at(Severity::Warn, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.log_at(Severity::Info, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.log_at(Severity::Debug, args)
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.log_at(Severity::Trace, args)
    }

    fn log_record(&self, record: &Record) -> io::Result<usize> {
        self.log_at(record.level().into(), *record.args())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        // log::Log can't hand write errors back to the caller
        let _ = self.log_record(record);
    }

    fn flush(&self) {
        let _ = self.output_target().flush();
    }
}

/// Local wall-clock time in RFC 3339 with second precision, e.g. `2021-03-04T10:20:30+01:00`.
pub fn current_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Render a complete log line: `[LEVEL][timestamp] message\n`.
pub fn format_line(level: Severity, timestamp: &str, args: fmt::Arguments<'_>) -> String {
    format!("[{}][{}] {}\n", level.label(), timestamp, args)
}

fn write_line(target: OutputTarget, line: &str) -> io::Result<usize> {
    match target {
        OutputTarget::Stdout => write_line_locked(io::stdout().lock(), line),
        OutputTarget::Stderr => write_line_locked(io::stderr().lock(), line),
    }
}

// std's stdout and stderr report writes to a closed descriptor (EBADF) as successful. Write
// through a duplicate of the descriptor while holding the std lock so that error comes back.
#[cfg(unix)]
fn write_line_locked<S: Write + AsFd>(mut stream: S, line: &str) -> io::Result<usize> {
    stream.flush()?;
    let mut file = File::from(stream.as_fd().try_clone_to_owned()?);
    write_line_to(&mut file, line)
}

#[cfg(not(unix))]
fn write_line_locked<S: Write>(mut stream: S, line: &str) -> io::Result<usize> {
    write_line_to(&mut stream, line)
}

// The line goes out in a single write so lines from other threads don't end up in the middle.
// When write_all fails halfway, only the error is returned and the count of bytes already
// written is lost.
fn write_line_to<W: Write>(out: &mut W, line: &str) -> io::Result<usize> {
    out.write_all(line.as_bytes())?;
    Ok(line.len())
}
