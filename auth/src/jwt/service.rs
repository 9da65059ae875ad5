use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::ClaimSet;
use super::claims::Claims;
use super::errors::IssueError;
use super::errors::VerificationError;
use super::key::SigningKey;
use crate::identity::Identity;

/// Issues and verifies signed, time-bounded bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a single symmetric key.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenService {
    /// Create a token service bound to `key` for its whole lifetime.
    pub fn new(key: &SigningKey) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // Expiry is checked after decoding with zero leeway, see `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            algorithm,
            validation,
        }
    }

    /// Issue a token for `subject` carrying `claims`, valid for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Token subject (user email)
    /// * `claims` - Custom claims, must not use the keys `sub`, `exp` or `iat`
    /// * `ttl` - Lifetime from now; zero or negative yields an already expired token
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `ReservedClaim` - A custom claim collides with a registered one
    /// * `InvalidTtl` - Expiration overflows the timestamp range
    /// * `Encoding` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        claims: &ClaimSet,
        ttl: Duration,
    ) -> Result<String, IssueError> {
        self.issue_at(subject, claims, ttl, Utc::now())
    }

    fn issue_at(
        &self,
        subject: &str,
        claims: &ClaimSet,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        if let Some(reserved) = Claims::RESERVED
            .iter()
            .find(|key| claims.contains_key(**key))
        {
            return Err(IssueError::ReservedClaim(reserved.to_string()));
        }

        let expiration = now
            .checked_add_signed(ttl)
            .ok_or(IssueError::InvalidTtl)?;

        let payload = Claims {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            extra: claims.clone(),
        };

        encode(&Header::new(self.algorithm), &payload, &self.encoding_key)
            .map_err(|e| IssueError::Encoding(e.to_string()))
    }

    /// Verify a token and return the identity it carries.
    ///
    /// The signature is checked before the expiration, so a forged token is
    /// reported as `SignatureInvalid` even when its `exp` is in the past.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded or lacks `sub`/`exp`
    /// * `SignatureInvalid` - Signature does not match this service's key
    /// * `Expired` - Current time is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<Identity, VerificationError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<Identity, VerificationError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    VerificationError::SignatureInvalid
                }
                _ => VerificationError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now) {
            return Err(VerificationError::Expired);
        }

        Ok(Identity {
            subject: claims.sub,
            claims: claims.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::ClaimSetBuilder;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SigningKey::from_secret(secret).expect("Invalid test secret"))
    }

    fn role_claims() -> ClaimSet {
        ClaimSetBuilder::new().with("role", "USER").build()
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service("01234567890123456789012345678901");

        let token = tokens
            .issue("user@example.com", &role_claims(), Duration::seconds(10))
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let identity = tokens.verify(&token).expect("Failed to verify token");
        assert_eq!(identity.subject, "user@example.com");
        assert_eq!(identity.claim_str("role"), Some("USER"));
    }

    #[test]
    fn test_claims_preserved_exactly() {
        let tokens = service("01234567890123456789012345678901");
        let claims = ClaimSetBuilder::new()
            .with("role", "ADMIN")
            .with("tenant", 42)
            .with("scopes", vec!["items:read", "items:write"])
            .with("flags", serde_json::json!({ "beta": true }))
            .build();

        let token = tokens
            .issue("admin@example.com", &claims, Duration::hours(12))
            .unwrap();
        let identity = tokens.verify(&token).unwrap();

        assert_eq!(identity.claims, claims);
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let tokens = service("01234567890123456789012345678901");

        let token = tokens
            .issue("user@example.com", &role_claims(), Duration::zero())
            .unwrap();

        assert_eq!(tokens.verify(&token), Err(VerificationError::Expired));
    }

    #[test]
    fn test_elapsed_token_is_expired() {
        let tokens = service("01234567890123456789012345678901");
        let issued_at = Utc::now() - Duration::hours(13);

        let token = tokens
            .issue_at("user@example.com", &role_claims(), Duration::hours(12), issued_at)
            .unwrap();

        assert_eq!(tokens.verify(&token), Err(VerificationError::Expired));
    }

    #[test]
    fn test_expiry_boundary() {
        let tokens = service("01234567890123456789012345678901");
        let issued_at = Utc::now();
        let token = tokens
            .issue_at("user@example.com", &role_claims(), Duration::seconds(60), issued_at)
            .unwrap();
        let exp = issued_at.timestamp() + 60;

        assert!(tokens.verify_at(&token, exp - 1).is_ok());
        assert_eq!(
            tokens.verify_at(&token, exp),
            Err(VerificationError::Expired)
        );
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = service("01234567890123456789012345678901");
        let token = tokens
            .issue("user@example.com", &role_claims(), Duration::hours(1))
            .unwrap();

        let (message, signature) = token.rsplit_once('.').unwrap();
        for position in 0..signature.len() {
            let mut tampered: Vec<char> = signature.chars().collect();
            tampered[position] = if tampered[position] == 'A' { 'B' } else { 'A' };
            let tampered: String = tampered.into_iter().collect();

            let result = tokens.verify(&format!("{}.{}", message, tampered));
            assert_eq!(
                result,
                Err(VerificationError::SignatureInvalid),
                "signature position {} accepted",
                position
            );
        }
    }

    #[test]
    fn test_wrong_key_rejected() {
        let issuer = service("secret1_at_least_32_bytes_long_key!");
        let verifier = service("secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("user@example.com", &role_claims(), Duration::hours(1))
            .unwrap();

        assert_eq!(
            verifier.verify(&token),
            Err(VerificationError::SignatureInvalid)
        );
    }

    #[test]
    fn test_forged_expired_token_reports_signature() {
        let issuer = service("secret1_at_least_32_bytes_long_key!");
        let verifier = service("secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("user@example.com", &role_claims(), Duration::zero())
            .unwrap();

        assert_eq!(
            verifier.verify(&token),
            Err(VerificationError::SignatureInvalid)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let tokens = service("01234567890123456789012345678901");

        for garbage in ["", "garbage", "invalid.token.here", "a.b", "...."] {
            assert_eq!(
                tokens.verify(garbage),
                Err(VerificationError::Malformed),
                "input {:?}",
                garbage
            );
        }
    }

    #[test]
    fn test_reserved_claim_rejected() {
        let tokens = service("01234567890123456789012345678901");
        let claims = ClaimSetBuilder::new().with("sub", "someone-else").build();

        let result = tokens.issue("user@example.com", &claims, Duration::hours(1));
        assert!(matches!(result, Err(IssueError::ReservedClaim(key)) if key == "sub"));
    }

    #[test]
    fn test_verification_is_deterministic() {
        let tokens = service("01234567890123456789012345678901");
        let token = tokens
            .issue("user@example.com", &role_claims(), Duration::zero())
            .unwrap();

        assert_eq!(tokens.verify(&token), tokens.verify(&token));
        assert_eq!(tokens.verify("nope"), tokens.verify("nope"));
    }
}
