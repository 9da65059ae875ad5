use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::RoleError;

/// User aggregate entity.
///
/// Represents a registered account. The password hash is never exposed
/// outside the domain and repositories, and Debug output omits it.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored and
/// compared exactly as given, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Blank` - Email is empty or whitespace
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            return Err(EmailError::Blank);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfies the registration policy.
///
/// Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 12;

    /// Check a raw password against the length policy.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 12 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// Account role, carried in issued tokens as the `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to register a new account with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Command to log in.
///
/// Fields are deliberately unvalidated: a malformed email simply matches no
/// account and fails like any other bad credential.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("a@example.com".to_string()).is_ok());
        assert_eq!(
            EmailAddress::new("   ".to_string()),
            Err(EmailError::Blank)
        );
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_email_keeps_case() {
        let email = EmailAddress::new("Alice@Example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "Alice@Example.com");
        assert_ne!(email, EmailAddress::new("alice@example.com".to_string()).unwrap());
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("very-strong-pass".to_string()).is_ok());
        assert!(Password::new("exactly12chr".to_string()).is_ok());
        assert_eq!(
            Password::new("short".to_string()),
            Err(PasswordPolicyError::TooShort { min: 12, actual: 5 })
        );
        // Counted in characters, not bytes.
        assert!(Password::new("é".repeat(11)).is_err());
        assert!(Password::new("é".repeat(12)).is_ok());
    }

    #[test]
    fn test_user_debug_hides_password_hash() {
        let user = User {
            id: UserId::new(),
            email: EmailAddress::new("a@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        };

        let debug = format!("{:?}", user);
        assert!(debug.contains("a@example.com"));
        assert!(!debug.contains("argon2id"));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("very-strong-pass".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("strong"));
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(Role::User.to_string(), "USER");
        assert!("root".parse::<Role>().is_err());
    }
}
