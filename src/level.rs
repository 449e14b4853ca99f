use std::fmt;
use std::str::FromStr;

const LABELS: [&str; 5] = ["ERROR", "WARN ", "INFO ", "DEBUG", "TRACE"];

/// Severity of a log line, ordered from most to least severe.
///
/// The numeric rank is what the threshold compares against: a line is shown when its rank is
/// lower than or equal to the rank of the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    pub fn rank(self) -> usize {
        self as usize
    }

    /// Return the severity for a rank, or `None` when the rank is outside `0..=4`.
    pub fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(Self::Error),
            1 => Some(Self::Warn),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            4 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Like `from_rank`, but unknown ranks resolve to `Trace`.
    pub fn from_rank_lossy(rank: usize) -> Self {
        Self::ALL.get(rank).copied().unwrap_or(Self::Trace)
    }

    /// Fixed five character label, padded with trailing spaces.
    pub fn label(self) -> &'static str {
        LABELS[self.rank()]
    }

    /// Whether a line at this severity gets through the given threshold.
    pub fn passes(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }
}

/// Label for a raw rank. Unknown ranks get the `TRACE` label.
pub fn label_for_rank(rank: usize) -> &'static str {
    Severity::from_rank_lossy(rank).label()
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log level '{}', expected one of error, warn, info, debug, trace or 0-4",
            self.input
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let severity = match value.to_ascii_lowercase().as_str() {
            "error" | "0" => Self::Error,
            "warn" | "warning" | "1" => Self::Warn,
            "info" | "2" => Self::Info,
            "debug" | "3" => Self::Debug,
            "trace" | "4" => Self::Trace,
            _ => {
                return Err(ParseSeverityError {
                    input: value.to_string(),
                })
            }
        };
        Ok(severity)
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warn => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Trace => log::Level::Trace,
        }
    }
}
