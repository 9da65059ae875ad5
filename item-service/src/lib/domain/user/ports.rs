use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account with the default role.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password as supplied by the caller
    ///
    /// # Returns
    /// Signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Token` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by exact email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Check whether an email address is already registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;
}
