use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service for registration and credential authentication.
///
/// Argon2 work runs on the blocking thread pool so an expensive hash
/// never stalls the async request dispatch path.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: Arc<auth::PasswordHasher>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: Arc::new(auth::PasswordHasher::new()),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let RegisterUserCommand {
            username,
            password,
            full_name,
        } = command;

        let hasher = Arc::clone(&self.password_hasher);
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username,
            full_name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn authenticate_user(&self, username: &str, password: &str) -> Result<User, UserError> {
        // A username that would never validate cannot belong to a user;
        // treat it like any other unknown username.
        let username = Username::new(username.to_string())
            .map_err(|_| UserError::Auth(AuthError::Unauthorized))?;

        let user = match self.repository.find_by_username(&username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username = %username, "Login attempt for unknown username");
                return Err(AuthError::Unauthorized.into());
            }
        };

        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let password_matches =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?;

        if !password_matches {
            tracing::debug!(username = %user.username, "Login attempt with wrong password");
            return Err(AuthError::Unauthorized.into());
        }

        Ok(user)
    }
}
