//! The process-wide signing secret.

use crate::error::TokenError;
use secrecy::{ExposeSecret, SecretString};

/// Symmetric key used to sign and verify tokens.
///
/// Built once at startup and handed to [`crate::TokenService::new`]. The
/// value is redacted from `Debug` output and zeroized on drop.
#[derive(Debug)]
pub struct SigningSecret(SecretString);

impl SigningSecret {
    /// Wrap a secret string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, TokenError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(TokenError::config("signing secret must not be empty"));
        }
        Ok(Self(SecretString::from(secret)))
    }

    pub(crate) fn expose_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let err = SigningSecret::new("").unwrap_err();
        assert!(matches!(err, TokenError::Config { .. }));
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = SigningSecret::new("hunter2-but-longer").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("hunter2"));
        assert_eq!(secret.expose_bytes(), b"hunter2-but-longer");
    }
}
