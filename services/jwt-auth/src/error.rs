//! Error types for token issuance and verification.
//!
//! Expiry is deliberately absent: an expired but otherwise valid token is a
//! `false` from [`crate::TokenService::verify`], not an error.

use jsonwebtoken::errors::ErrorKind;
use rust_common::PlatformError;
use thiserror::Error;

/// Token service error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token cannot be decoded into a header, payload and signature
    #[error("Token malformed: {reason}")]
    Malformed {
        /// Description of the decoding failure
        reason: String,
    },

    /// Signature does not match the configured secret and algorithm
    #[error("Token signature mismatch")]
    SignatureMismatch,

    /// A required claim is absent from an otherwise valid token
    #[error("Required claim missing: {claim}")]
    ClaimsInvalid {
        /// Name of the missing claim
        claim: String,
    },

    /// Signing a claim set failed
    #[error("JWT encoding error: {reason}")]
    Encoding {
        /// Codec error message
        reason: String,
    },

    /// Startup configuration is missing or invalid
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration problem
        reason: String,
    },
}

impl TokenError {
    /// Create a malformed token error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Create a missing claim error.
    #[must_use]
    pub fn claims_invalid(claim: impl Into<String>) -> Self {
        Self::ClaimsInvalid {
            claim: claim.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the presented token itself was rejected.
    ///
    /// Callers map these to an authentication failure; the remaining
    /// variants are server-side faults.
    #[must_use]
    pub const fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. } | Self::SignatureMismatch | Self::ClaimsInvalid { .. }
        )
    }

    /// Stable error code for responses and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => TOKEN_MALFORMED,
            Self::SignatureMismatch => TOKEN_SIGNATURE_MISMATCH,
            Self::ClaimsInvalid { .. } => TOKEN_CLAIMS_INVALID,
            Self::Encoding { .. } => TOKEN_ENCODING_ERROR,
            Self::Config { .. } => TOKEN_CONFIG_ERROR,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            // A token declaring another algorithm cannot carry a valid HS512 signature.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::SignatureMismatch,
            ErrorKind::MissingRequiredClaim(claim) => Self::claims_invalid(claim.clone()),
            _ => Self::malformed(err.to_string()),
        }
    }
}

impl From<PlatformError> for TokenError {
    fn from(err: PlatformError) -> Self {
        Self::config(err.to_string())
    }
}

/// Code for [`TokenError::Malformed`].
pub const TOKEN_MALFORMED: &str = "TOKEN_MALFORMED";
/// Code for [`TokenError::SignatureMismatch`].
pub const TOKEN_SIGNATURE_MISMATCH: &str = "TOKEN_SIGNATURE_MISMATCH";
/// Code for [`TokenError::ClaimsInvalid`].
pub const TOKEN_CLAIMS_INVALID: &str = "TOKEN_CLAIMS_INVALID";
/// Code for [`TokenError::Encoding`].
pub const TOKEN_ENCODING_ERROR: &str = "TOKEN_ENCODING_ERROR";
/// Code for [`TokenError::Config`].
pub const TOKEN_CONFIG_ERROR: &str = "TOKEN_CONFIG_ERROR";
