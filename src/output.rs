use std::fmt;
use std::io::{self, Write};

/// Stream log lines are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout = 0,
    Stderr = 1,
}

impl OutputTarget {
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    // Anything that isn't stderr is stdout
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Stderr,
            _ => Self::Stdout,
        }
    }

    pub(crate) fn flush(self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        };
        write!(f, "{}", label)
    }
}
