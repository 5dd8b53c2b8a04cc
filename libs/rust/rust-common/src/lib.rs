//! Shared library for cross-cutting concerns in jwt-auth Rust services.
//!
//! This crate provides centralized implementations for:
//! - A platform error type for startup and configuration failures
//! - Environment variable parsing with typed defaults
//! - Tracing subscriber initialisation (plain or JSON output)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod tracing_config;

pub use env::{load_dotenv, parse_env, require_env};
pub use error::PlatformError;
pub use tracing_config::{init_tracing, TracingConfig};
