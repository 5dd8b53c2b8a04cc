//! jwt-auth library.
//!
//! Issues HS512-signed bearer tokens for authenticated users and verifies
//! them later: signature, subject and a fixed five-hour expiry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod jwt;
pub mod metrics;
pub mod service;

// Re-exports for convenience
pub use config::Config;
pub use credentials::Credentials;
pub use error::TokenError;
pub use jwt::{Claims, SigningSecret};
pub use service::{TokenService, TOKEN_VALIDITY_SECS};
