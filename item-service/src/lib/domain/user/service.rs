use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::ClaimSetBuilder;
use auth::StoredCredentials;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Password hashing and verification run on the blocking thread pool.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl` - Lifetime of access tokens issued on login
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
        }
    }
}

fn credentials_of(user: &User) -> StoredCredentials {
    StoredCredentials {
        subject: user.email.as_str().to_string(),
        password_hash: user.password_hash.clone(),
        claims: ClaimSetBuilder::new()
            .with("role", user.role.as_str())
            .build(),
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        if self
            .repository
            .exists_by_email(command.email.as_str())
            .await?
        {
            return Err(UserError::EmailTaken(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: Role::default(),
            created_at: Utc::now().trunc_subsecs(6),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let stored = self
            .repository
            .find_by_email(&command.email)
            .await?
            .as_ref()
            .map(credentials_of);

        let authenticator = Arc::clone(&self.authenticator);
        let token_ttl = self.token_ttl;
        let password = command.password;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, stored.as_ref(), token_ttl)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Credential check task failed: {}", e)))?;

        match result {
            Ok(result) => Ok(result.access_token),
            Err(e) => {
                tracing::info!(reason = %e, "Login rejected");
                Err(e.into())
            }
        }
    }
}
