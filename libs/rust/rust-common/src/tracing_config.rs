//! Tracing subscriber setup shared by all services.

use crate::env::parse_env;
use crate::error::PlatformError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Log level filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Whether to output JSON format
    pub json_output: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "rust-service".to_string(),
            log_level: "info".to_string(),
            json_output: false,
        }
    }
}

impl TracingConfig {
    /// Read `LOG_LEVEL` and `LOG_JSON` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_JSON` is set to something other than a bool.
    pub fn from_env(service_name: impl Into<String>) -> Result<Self, PlatformError> {
        Ok(Self {
            service_name: service_name.into(),
            log_level: parse_env("LOG_LEVEL", "info".to_string())?,
            json_output: parse_env("LOG_JSON", false)?,
        })
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`TracingConfig::log_level`]. Call once
/// at startup, before anything logs.
///
/// # Errors
///
/// Returns [`PlatformError::Tracing`] if a global subscriber is already set.
pub fn init_tracing(config: &TracingConfig) -> Result<(), PlatformError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };
    result.map_err(|e| PlatformError::Tracing(e.to_string()))?;

    tracing::info!(service = %config.service_name, json = config.json_output, "Tracing initialised");
    Ok(())
}
