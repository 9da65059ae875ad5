//! Authentication core
//!
//! Provides the pieces a service needs to authenticate callers:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//! - The bearer gate that turns an `Authorization` header into an identity
//!
//! Nothing here knows about HTTP frameworks or storage; services adapt these
//! types at their own boundaries.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("very-strong-pass").unwrap();
//! assert!(hasher.verify("very-strong-pass", &hash));
//! assert!(!hasher.verify("very-strong-pass", "corrupt"));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{ClaimSetBuilder, SigningKey, TokenService};
//! use chrono::Duration;
//!
//! let key = SigningKey::from_secret("secret_key_at_least_32_bytes_long!").unwrap();
//! let tokens = TokenService::new(&key);
//! let claims = ClaimSetBuilder::new().with("role", "USER").build();
//! let token = tokens.issue("a@example.com", &claims, Duration::hours(12)).unwrap();
//! let identity = tokens.verify(&token).unwrap();
//! assert_eq!(identity.subject, "a@example.com");
//! ```
//!
//! ## Bearer Gate
//! ```
//! use auth::{Authenticator, GateOutcome, SigningKey};
//!
//! let key = SigningKey::from_secret("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&key);
//!
//! assert_eq!(auth.identify(None), GateOutcome::NoHeader);
//! assert!(auth.identify(Some("Bearer garbage")).into_identity().is_none());
//! ```

pub mod authenticator;
pub mod gate;
pub mod identity;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::StoredCredentials;
pub use gate::GateOutcome;
pub use identity::Identity;
pub use jwt::ClaimSet;
pub use jwt::ClaimSetBuilder;
pub use jwt::IssueError;
pub use jwt::KeyError;
pub use jwt::SigningKey;
pub use jwt::TokenService;
pub use jwt::VerificationError;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
