use chrono::Duration;

use crate::gate;
use crate::gate::GateOutcome;
use crate::identity::Identity;
use crate::jwt::ClaimSet;
use crate::jwt::IssueError;
use crate::jwt::SigningKey;
use crate::jwt::TokenService;
use crate::jwt::VerificationError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Shared read-only across requests; holds the only copy of the signing key.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Stored credentials of an account, as loaded from the credential store.
///
/// Debug output redacts the password hash.
#[derive(Clone)]
pub struct StoredCredentials {
    /// Token subject for this account
    pub subject: String,
    /// PHC string of the password
    pub password_hash: String,
    /// Claims to embed in issued tokens
    pub claims: ClaimSet,
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("subject", &self.subject)
            .field("password_hash", &"[redacted]")
            .field("claims", &self.claims)
            .finish()
    }
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] IssueError),
}

impl Authenticator {
    /// Create an authenticator with the default hashing cost.
    pub fn new(key: &SigningKey) -> Self {
        Self::with_hasher(key, PasswordHasher::new())
    }

    /// Create an authenticator with an explicitly configured hasher.
    pub fn with_hasher(key: &SigningKey, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            token_service: TokenService::new(key),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// An unknown account (`stored` is `None`) and a wrong password yield the
    /// same `InvalidCredentials` error, and both pay for one hash derivation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password supplied by the caller
    /// * `stored` - Credentials found for the account, if any
    /// * `ttl` - Lifetime of the issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Account unknown or password mismatch
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored: Option<&StoredCredentials>,
        ttl: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let Some(stored) = stored else {
            self.password_hasher.burn(password);
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, &stored.password_hash)
        {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self
            .token_service
            .issue(&stored.subject, &stored.claims, ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `IssueError` - Token generation failed
    pub fn issue_token(
        &self,
        subject: &str,
        claims: &ClaimSet,
        ttl: Duration,
    ) -> Result<String, IssueError> {
        self.token_service.issue(subject, claims, ttl)
    }

    /// Validate a token and return the identity it carries.
    ///
    /// # Errors
    /// * `VerificationError` - Token malformed, forged, or expired
    pub fn validate_token(&self, token: &str) -> Result<Identity, VerificationError> {
        self.token_service.verify(token)
    }

    /// Run the bearer gate on an `Authorization` header value.
    pub fn identify(&self, authorization: Option<&str>) -> GateOutcome {
        gate::evaluate(authorization, &self.token_service)
    }
}
