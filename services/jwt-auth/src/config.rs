//! Centralized configuration for the jwt-auth service.
//!
//! All configuration is loaded from environment variables and validated
//! at startup.

use crate::error::TokenError;
use crate::jwt::SigningSecret;
use rust_common::{load_dotenv, parse_env, require_env, TracingConfig};

/// Service name reported in logs.
pub const SERVICE_NAME: &str = "jwt-auth";

/// jwt-auth configuration.
#[derive(Debug)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: SigningSecret,
    /// Logging setup
    pub tracing: TracingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if `JWT_SECRET` is missing or empty, or
    /// if any variable fails to parse.
    pub fn from_env() -> Result<Self, TokenError> {
        load_dotenv();

        let host = parse_env("HOST", "0.0.0.0".to_string())?;
        let port = parse_env("PORT", 8080)?;
        let jwt_secret = SigningSecret::new(require_env("JWT_SECRET")?)?;
        let tracing = TracingConfig::from_env(SERVICE_NAME)?;

        Ok(Self {
            host,
            port,
            jwt_secret,
            tracing,
        })
    }

    /// `host:port` for the HTTP listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
