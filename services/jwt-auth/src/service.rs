//! Bearer token issuance and verification.
//!
//! A [`TokenService`] is immutable once built: it holds the keys derived
//! from the signing secret and the validity window, nothing else. Clones
//! share no state and can be handed to any number of workers.

use crate::error::TokenError;
use crate::jwt::{Claims, JwtCodec, SigningSecret, ALGORITHM_NAME};
use crate::metrics;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::{debug, instrument, warn};

/// Lifetime of an issued token: five hours.
pub const TOKEN_VALIDITY_SECS: i64 = 5 * 60 * 60;

/// Issues and verifies HS512-signed tokens for usernames.
#[derive(Clone)]
pub struct TokenService {
    codec: JwtCodec,
    validity: Duration,
}

impl TokenService {
    /// Create a service signing with `secret` and the fixed validity window.
    #[must_use]
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            codec: JwtCodec::hs512(secret),
            validity: Duration::seconds(TOKEN_VALIDITY_SECS),
        }
    }

    /// Override the validity window. A negative window issues tokens that
    /// are already expired.
    #[must_use]
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    /// Issue a token for `username`, valid from now.
    ///
    /// The caller must already have authenticated the user.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if signing fails or the expiry is out
    /// of range.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now())
    }

    /// Issue a token for `username` as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if signing fails or `now` plus the
    /// validity window is out of range.
    #[instrument(skip(self), fields(algorithm = ALGORITHM_NAME))]
    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::new(username, now, self.validity)?;
        let token = self.codec.encode(&claims)?;

        metrics::record_token_issued(ALGORITHM_NAME);
        debug!(exp = %claims.exp, "Token issued");
        Ok(token)
    }

    /// Decode `token`, check its signature and return the full claim set.
    ///
    /// Expiry is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`], [`TokenError::SignatureMismatch`]
    /// or [`TokenError::ClaimsInvalid`] if the token is rejected.
    pub fn claims(&self, token: &str) -> Result<Claims, TokenError> {
        self.codec.decode(token)
    }

    /// Subject of a correctly signed token.
    ///
    /// # Errors
    ///
    /// Same as [`TokenService::claims`].
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        self.claims(token).map(|claims| claims.sub)
    }

    /// Expiry of a correctly signed token.
    ///
    /// # Errors
    ///
    /// Same as [`TokenService::claims`].
    pub fn extract_expiry(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.claims(token).map(|claims| claims.exp)
    }

    /// Check that `token` belongs to `expected_username` and has not expired.
    ///
    /// Returns `Ok(false)` for a genuine token that is stale or issued to
    /// someone else; a token that cannot be trusted at all is an error.
    ///
    /// # Errors
    ///
    /// Same as [`TokenService::claims`].
    pub fn verify(&self, token: &str, expected_username: &str) -> Result<bool, TokenError> {
        self.verify_at(token, expected_username, Utc::now())
    }

    /// [`TokenService::verify`] against an explicit current time.
    ///
    /// # Errors
    ///
    /// Same as [`TokenService::claims`].
    #[instrument(skip(self, token))]
    pub fn verify_at(
        &self,
        token: &str,
        expected_username: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, TokenError> {
        let claims = match self.claims(token) {
            Ok(claims) => claims,
            Err(err) => {
                warn!(code = err.code(), "Token rejected");
                metrics::record_verification(outcome_label(&err));
                return Err(err);
            }
        };

        let outcome = if claims.sub != expected_username {
            metrics::OUTCOME_SUBJECT_MISMATCH
        } else if claims.is_expired_at(now) {
            metrics::OUTCOME_EXPIRED
        } else {
            metrics::OUTCOME_VALID
        };
        metrics::record_verification(outcome);
        debug!(outcome, "Token verified");

        Ok(outcome == metrics::OUTCOME_VALID)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &ALGORITHM_NAME)
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

fn outcome_label(err: &TokenError) -> &'static str {
    match err {
        TokenError::SignatureMismatch => metrics::OUTCOME_SIGNATURE_MISMATCH,
        TokenError::ClaimsInvalid { .. } => metrics::OUTCOME_CLAIMS_INVALID,
        _ => metrics::OUTCOME_MALFORMED,
    }
}
