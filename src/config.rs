//! Runtime configuration for the async feedback sender.

use std::time::Duration;
use thiserror::Error;

pub const DEBOUNCE_ENV: &str = "PWD_STRENGTH_DEBOUNCE_MS";

/// Delay applied when `PWD_STRENGTH_DEBOUNCE_MS` is not set.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: expected milliseconds as a non-negative integer")]
    InvalidDebounce { var: &'static str, value: String },
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Reads the debounce delay from the environment.
///
/// Priority:
/// 1. Environment variable `PWD_STRENGTH_DEBOUNCE_MS`
/// 2. [`DEFAULT_DEBOUNCE`]
///
/// # Errors
///
/// Returns error if the variable is set but is not a non-negative integer.
pub fn debounce_from_env() -> Result<Duration, ConfigError> {
    match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDebounce {
                var: DEBOUNCE_ENV,
                value: raw,
            }),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_DEBOUNCE),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(DEBOUNCE_ENV)),
    }
}

/// Debounce delay, falling back to [`DEFAULT_DEBOUNCE`] on invalid values.
pub fn debounce() -> Duration {
    debounce_from_env().unwrap_or_else(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!("{}, using default {:?}", _e, DEFAULT_DEBOUNCE);
        DEFAULT_DEBOUNCE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_debounce_default() {
        remove_env(DEBOUNCE_ENV);

        assert_eq!(debounce_from_env(), Ok(DEFAULT_DEBOUNCE));
        assert_eq!(debounce(), Duration::from_millis(300));
    }

    #[test]
    #[serial]
    fn test_debounce_from_env() {
        set_env(DEBOUNCE_ENV, " 150 ");

        assert_eq!(debounce_from_env(), Ok(Duration::from_millis(150)));

        remove_env(DEBOUNCE_ENV);
    }

    #[test]
    #[serial]
    fn test_debounce_zero_is_allowed() {
        set_env(DEBOUNCE_ENV, "0");

        assert_eq!(debounce(), Duration::ZERO);

        remove_env(DEBOUNCE_ENV);
    }

    #[test]
    #[serial]
    fn test_debounce_invalid_value() {
        set_env(DEBOUNCE_ENV, "-5");

        let result = debounce_from_env();
        match result {
            Err(ConfigError::InvalidDebounce { var, value }) => {
                assert_eq!(var, DEBOUNCE_ENV);
                assert_eq!(value, "-5");
            }
            _ => panic!("Expected InvalidDebounce error"),
        }
        assert_eq!(debounce(), DEFAULT_DEBOUNCE);

        remove_env(DEBOUNCE_ENV);
    }
}
