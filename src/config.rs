use std::env;

use crate::level::Severity;

/// Environment variable holding the threshold rank (`0` for error up to `4` for trace).
pub const LEVEL_ENV_VAR: &str = "BATH_LOGGER_LEVEL";

/// Threshold used when the environment doesn't configure one.
pub const DEFAULT_THRESHOLD: Severity = Severity::Warn;

/// Parse a threshold override value.
///
/// Only base 10 integers in the `0..=4` range are accepted. Anything else, including an empty
/// string or surrounding whitespace, returns `None` so the caller keeps its current threshold.
pub fn parse_threshold(value: &str) -> Option<Severity> {
    value
        .parse::<i64>()
        .ok()
        .and_then(Severity::from_rank)
}

/// Read the threshold override from the process environment.
pub fn threshold_from_env() -> Option<Severity> {
    threshold_override(env::var(LEVEL_ENV_VAR))
}

// Unset and non-unicode values count as "no override"
fn threshold_override(env_value: Result<String, env::VarError>) -> Option<Severity> {
    match env_value {
        Ok(value) => parse_threshold(&value),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_threshold, threshold_override};
    use crate::level::Severity;
    use std::env::VarError;

    #[test]
    fn parses_every_rank() {
        assert_eq!(parse_threshold("0"), Some(Severity::Error));
        assert_eq!(parse_threshold("1"), Some(Severity::Warn));
        assert_eq!(parse_threshold("2"), Some(Severity::Info));
        assert_eq!(parse_threshold("3"), Some(Severity::Debug));
        assert_eq!(parse_threshold("4"), Some(Severity::Trace));
    }

    #[test]
    fn accepts_signed_integers_in_range() {
        assert_eq!(parse_threshold("+2"), Some(Severity::Info));
        assert_eq!(parse_threshold("-0"), Some(Severity::Error));
    }

    #[test]
    fn ignores_invalid_values() {
        for value in ["", "abc", "99", "-1", "5", " 2", "2 ", "2.0", "info"] {
            assert_eq!(parse_threshold(value), None, "value {:?}", value);
        }
    }

    #[test]
    fn missing_variable_is_no_override() {
        assert_eq!(threshold_override(Err(VarError::NotPresent)), None);
        assert_eq!(
            threshold_override(Ok("3".to_string())),
            Some(Severity::Debug)
        );
    }
}
