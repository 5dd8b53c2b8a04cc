//! Prometheus metrics for the token service.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec, Encoder, TextEncoder};

/// Tokens issued counter.
pub static TOKENS_ISSUED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "jwt_auth_tokens_issued_total",
        "Total number of tokens issued",
        &["algorithm"]
    )
    .expect("Failed to register tokens_issued metric")
});

/// Token verifications counter, labelled by outcome.
pub static TOKEN_VERIFICATIONS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "jwt_auth_token_verifications_total",
        "Total number of token verifications",
        &["outcome"]
    )
    .expect("Failed to register token_verifications metric")
});

/// Token matched the subject and had not expired.
pub const OUTCOME_VALID: &str = "valid";
/// Token was genuine but past its expiry.
pub const OUTCOME_EXPIRED: &str = "expired";
/// Token was genuine but issued to another user.
pub const OUTCOME_SUBJECT_MISMATCH: &str = "subject_mismatch";
/// Token could not be decoded.
pub const OUTCOME_MALFORMED: &str = "malformed";
/// Token signature or algorithm did not match.
pub const OUTCOME_SIGNATURE_MISMATCH: &str = "signature_mismatch";
/// Token lacked a required claim.
pub const OUTCOME_CLAIMS_INVALID: &str = "claims_invalid";

/// Record a token issuance.
pub fn record_token_issued(algorithm: &str) {
    TOKENS_ISSUED.with_label_values(&[algorithm]).inc();
}

/// Record the outcome of a verification.
pub fn record_verification(outcome: &str) {
    TOKEN_VERIFICATIONS.with_label_values(&[outcome]).inc();
}

/// Render every registered metric in the Prometheus text format.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
