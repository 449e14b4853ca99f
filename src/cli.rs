use bath_logger::Severity;
use clap::{AppSettings, Parser};

#[derive(Parser, Debug)]
#[clap(
    name = "bath-logger",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment,
    setting(AppSettings::DeriveDisplayOrder)
)]
/**
Write a leveled log line to stdout or stderr.

The line is only written when its level passes the threshold. The threshold
defaults to warn and is read from the `BATH_LOGGER_LEVEL` environment variable
(0 = error, 1 = warn, 2 = info, 3 = debug, 4 = trace).

## Usage examples

    bath-logger --level error Something broke
      Write "[ERROR][<time>] Something broke" to stdout.

    BATH_LOGGER_LEVEL=3 bath-logger --level debug "x=5"
      Write a debug line, allowed by the environment threshold.

    bath-logger --threshold trace --level trace --stderr tracing
      Write a trace line to stderr.
*/
pub struct Options {
    /// Level of the message: error, warn, info, debug, trace or 0-4
    #[clap(long, default_value = "info", help_heading = "MESSAGE")]
    pub level: Severity,

    /// Override the threshold from the environment
    #[clap(long, help_heading = "OUTPUT")]
    pub threshold: Option<Severity>,

    /// Write to stderr instead of stdout
    #[clap(long, help_heading = "OUTPUT")]
    pub stderr: bool,

    /// Message words, joined by a space
    #[clap(name = "message", required = true)]
    pub words: Vec<String>,
}

impl Options {
    pub fn message(&self) -> String {
        self.words.join(" ")
    }
}

// Print the long version label including the target for which it was built
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\n",
        env!("BATH_LOGGER_BUILD_TARGET_TRIPLE")
    )
}

#[cfg(test)]
mod tests {
    use super::Options;
    use bath_logger::Severity;
    use clap::Parser;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["bath-logger", "hello"]);
        assert_eq!(options.level, Severity::Info);
        assert_eq!(options.threshold, None);
        assert!(!options.stderr);
        assert_eq!(options.message(), "hello");
    }

    #[test]
    fn all_options() {
        let options = Options::parse_from([
            "bath-logger",
            "--level",
            "debug",
            "--threshold",
            "4",
            "--stderr",
            "x=5",
            "and more",
        ]);
        assert_eq!(options.level, Severity::Debug);
        assert_eq!(options.threshold, Some(Severity::Trace));
        assert!(options.stderr);
        assert_eq!(options.message(), "x=5 and more");
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Options::try_parse_from(["bath-logger", "--level", "loud", "hi"]).is_err());
        assert!(Options::try_parse_from(["bath-logger", "--threshold", "9", "hi"]).is_err());
    }

    #[test]
    fn requires_message() {
        assert!(Options::try_parse_from(["bath-logger"]).is_err());
    }
}
