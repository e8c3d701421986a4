//! Typed access to environment variables.
//!
//! Configuration that used to live in ambient process state is read once,
//! here, and handed to its consumer as an explicit value.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but its value does not parse.
    #[error("Invalid value {value:?} for environment variable {name}: {message}")]
    Invalid {
        name: String,
        value: String,
        message: String,
    },
}

/// Reads a required environment variable.
///
/// Unset, empty and non-unicode values all count as missing.
pub fn get_env_var(name: &str) -> Result<String, EnvError> {
    get_env_var_opt(name).ok_or_else(|| EnvError::Missing(name.to_string()))
}

/// Reads an optional environment variable, treating an empty value as unset.
pub fn get_env_var_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads an environment variable, falling back to `default` when unset.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    get_env_var_opt(name).unwrap_or_else(|| default.to_string())
}

/// Reads and parses an environment variable, falling back to `default` when unset.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
/// * `default` - Value used when the variable is unset or empty.
pub fn get_env_parsed<T>(name: &str, default: T) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    match get_env_var_opt(name) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| EnvError::Invalid {
            name: name.to_string(),
            message: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set(name: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe { std::env::set_var(name, value) }
    }

    fn unset(name: &str) {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe { std::env::remove_var(name) }
    }

    #[test]
    #[serial]
    fn missing_variable_is_named() {
        unset("SHARED_UTILS_TEST_MISSING");
        assert_eq!(
            get_env_var("SHARED_UTILS_TEST_MISSING"),
            Err(EnvError::Missing("SHARED_UTILS_TEST_MISSING".into()))
        );
    }

    #[test]
    #[serial]
    fn blank_value_counts_as_unset() {
        set("SHARED_UTILS_TEST_BLANK", "   ");
        assert_eq!(get_env_var_opt("SHARED_UTILS_TEST_BLANK"), None);
        assert_eq!(get_env_var_or("SHARED_UTILS_TEST_BLANK", "fallback"), "fallback");
        unset("SHARED_UTILS_TEST_BLANK");
    }

    #[test]
    #[serial]
    fn parsed_values_and_defaults() {
        unset("SHARED_UTILS_TEST_NUM");
        assert_eq!(get_env_parsed("SHARED_UTILS_TEST_NUM", 10u64), Ok(10));

        set("SHARED_UTILS_TEST_NUM", " 42 ");
        assert_eq!(get_env_parsed("SHARED_UTILS_TEST_NUM", 10u64), Ok(42));

        set("SHARED_UTILS_TEST_NUM", "soon");
        let err = get_env_parsed("SHARED_UTILS_TEST_NUM", 10u64).unwrap_err();
        assert!(matches!(err, EnvError::Invalid { ref value, .. } if value == "soon"));
        unset("SHARED_UTILS_TEST_NUM");
    }
}
