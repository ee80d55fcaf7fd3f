use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for the authentication domain service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from a validated command.
    ///
    /// Hashes the password and persists the record. The repository is
    /// only reached after validation has already succeeded, so a
    /// rejected registration never leaves a partial write.
    ///
    /// # Errors
    /// * `Validation(DuplicateUsername)` - Username is already taken
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Repository operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Resolve raw login credentials to a verified user.
    ///
    /// Unknown username and wrong password are indistinguishable in the
    /// returned error; both surface as `Auth(Unauthorized)`.
    ///
    /// # Errors
    /// * `Auth(Unauthorized)` - Credentials do not match any user
    /// * `DatabaseError` - Repository operation failed
    async fn authenticate_user(&self, username: &str, password: &str) -> Result<User, UserError>;
}

/// Persistence operations for user records.
///
/// Username uniqueness is enforced here, at the storage boundary.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `Validation(DuplicateUsername)` - Username is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
