//! Login request model.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Username and password presented by a client.
///
/// The password is never inspected by the token service; checking it is
/// the job of whatever user store authenticates the caller before a token
/// is issued.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Account name, becomes the token subject
    pub username: String,
    /// Plaintext password, redacted in `Debug`
    #[serde(deserialize_with = "secret_string")]
    pub password: SecretString,
}

impl Credentials {
    /// Build credentials from their parts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

fn secret_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}
