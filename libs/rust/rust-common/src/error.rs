//! Centralized error type for the shared library.
//!
//! Everything in here fails at process startup: a missing variable, an
//! unparsable value or a subscriber that cannot be installed. Callers map
//! these into their own error types at the service boundary.

use thiserror::Error;

/// Common error type for platform operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// A required environment variable is not set
    #[error("Missing environment variable: {name}")]
    MissingEnv {
        /// Name of the variable
        name: String,
    },

    /// An environment variable is set but cannot be parsed
    #[error("Invalid {name}: {reason}")]
    InvalidEnv {
        /// Name of the variable
        name: String,
        /// Parser error message
        reason: String,
    },

    /// The global tracing subscriber could not be installed
    #[error("Tracing initialisation failed: {0}")]
    Tracing(String),
}

impl PlatformError {
    /// Create a missing variable error.
    #[must_use]
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// Create an invalid variable error.
    #[must_use]
    pub fn invalid_env(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnv {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending environment variable, if any.
    #[must_use]
    pub fn env_name(&self) -> Option<&str> {
        match self {
            Self::MissingEnv { name } | Self::InvalidEnv { name, .. } => Some(name),
            Self::Tracing(_) => None,
        }
    }
}
