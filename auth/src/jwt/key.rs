use std::fmt;

use super::errors::KeyError;

/// Symmetric key material for signing and verifying tokens.
///
/// Built once at startup from the configured secret and handed to
/// [`TokenService::new`](super::TokenService::new). Never mutated afterwards.
#[derive(Clone)]
pub struct SigningKey {
    secret: Vec<u8>,
}

impl SigningKey {
    /// HS256 needs at least 256 bits of key material.
    pub const MIN_LENGTH: usize = 32;

    /// Build a signing key from a configured secret.
    ///
    /// # Errors
    /// * `TooShort` - Secret is shorter than [`Self::MIN_LENGTH`] bytes
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self, KeyError> {
        let secret = secret.as_ref();
        if secret.len() < Self::MIN_LENGTH {
            return Err(KeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }

        Ok(Self {
            secret: secret.to_vec(),
        })
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("secret", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        let result = SigningKey::from_secret("too-short");
        assert_eq!(
            result.unwrap_err(),
            KeyError::TooShort { min: 32, actual: 9 }
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = SigningKey::from_secret("01234567890123456789012345678901").unwrap();
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("0123456789"));
        assert!(rendered.contains("redacted"));
    }
}
