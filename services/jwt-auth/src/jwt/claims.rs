use crate::error::TokenError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims every token must carry.
pub const REQUIRED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// The claim set embedded in a bearer token.
///
/// Timestamps travel as whole seconds since the epoch, so sub-second
/// precision is dropped on construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username the token was issued for
    pub sub: String,
    /// Issued-at
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,
    /// Expiry
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

impl Claims {
    /// Build claims for `subject` issued at `issued_at`, expiring `validity` later.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if the expiry falls outside the
    /// representable date range.
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, TokenError> {
        let iat = truncate_to_seconds(issued_at);
        let exp = iat
            .checked_add_signed(validity)
            .ok_or_else(|| TokenError::Encoding {
                reason: "expiry out of range".to_string(),
            })?;

        Ok(Claims {
            sub: subject.into(),
            iat,
            exp,
        })
    }

    /// True once `now` has reached the expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now
    }
}

fn truncate_to_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(at.timestamp(), 0).unwrap_or(at)
}
