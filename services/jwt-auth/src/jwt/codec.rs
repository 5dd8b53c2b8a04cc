use crate::error::TokenError;
use crate::jwt::claims::{Claims, REQUIRED_CLAIMS};
use crate::jwt::secret::SigningSecret;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

/// Header name of the signing algorithm.
pub const ALGORITHM_NAME: &str = "HS512";

/// Compact JWS serialization of [`Claims`] under a single HMAC key.
///
/// Signature and algorithm checks are done here; expiry is left to the
/// caller so that a stale token still decodes.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Build a codec signing and verifying with HMAC-SHA-512 under `secret`.
    pub fn hs512(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        // Presence is checked after decoding so every claim reports the same way.
        validation.required_spec_claims.clear();

        JwtCodec {
            encoding_key: EncodingKey::from_secret(secret.expose_bytes()),
            decoding_key: DecodingKey::from_secret(secret.expose_bytes()),
            validation,
        }
    }

    /// Sign `claims` into a compact `header.payload.signature` string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if the codec fails to sign.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS512), claims, &self.encoding_key).map_err(|e| {
            TokenError::Encoding {
                reason: e.to_string(),
            }
        })
    }

    /// Verify the signature of `token` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`], [`TokenError::SignatureMismatch`]
    /// or [`TokenError::ClaimsInvalid`] if the token is rejected.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)?;
        let raw = token_data.claims;

        if let Some(missing) = REQUIRED_CLAIMS.iter().find(|claim| !raw.contains_key(**claim)) {
            return Err(TokenError::claims_invalid(*missing));
        }

        serde_json::from_value(Value::Object(raw)).map_err(|e| TokenError::malformed(e.to_string()))
    }
}
