//! Environment variable helpers.
//!
//! Services read their configuration from the process environment, with an
//! optional `.env` file loaded first for local development.

use crate::error::PlatformError;
use std::env;
use std::str::FromStr;

/// Load a `.env` file from the working directory if one exists.
///
/// Variables already present in the environment win over the file.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }
}

/// Parse environment variable with default value.
///
/// # Errors
///
/// Returns [`PlatformError::InvalidEnv`] if the variable is set but does not
/// parse as `T`.
pub fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, PlatformError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e: T::Err| PlatformError::invalid_env(name, e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Read a required, non-empty environment variable.
///
/// # Errors
///
/// Returns [`PlatformError::MissingEnv`] if the variable is unset or empty.
pub fn require_env(name: &str) -> Result<String, PlatformError> {
    match env::var(name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(PlatformError::missing_env(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; the process environment is shared.

    #[test]
    fn test_parse_env_default_when_unset() {
        env::remove_var("RUST_COMMON_TEST_UNSET");
        let port: u16 = parse_env("RUST_COMMON_TEST_UNSET", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        env::set_var("RUST_COMMON_TEST_PORT", " 9090 ");
        let port: u16 = parse_env("RUST_COMMON_TEST_PORT", 8080).unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        env::set_var("RUST_COMMON_TEST_BAD", "not-a-number");
        let err = parse_env::<u16>("RUST_COMMON_TEST_BAD", 8080).unwrap_err();
        assert_eq!(err.env_name(), Some("RUST_COMMON_TEST_BAD"));
    }

    #[test]
    fn test_require_env() {
        env::set_var("RUST_COMMON_TEST_REQUIRED", "value");
        assert_eq!(require_env("RUST_COMMON_TEST_REQUIRED").unwrap(), "value");

        env::set_var("RUST_COMMON_TEST_EMPTY", "");
        assert_eq!(
            require_env("RUST_COMMON_TEST_EMPTY"),
            Err(PlatformError::missing_env("RUST_COMMON_TEST_EMPTY"))
        );

        env::remove_var("RUST_COMMON_TEST_MISSING");
        assert!(require_env("RUST_COMMON_TEST_MISSING").is_err());
    }
}
