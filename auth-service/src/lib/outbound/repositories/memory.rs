use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;
use crate::user::errors::ValidationError;

/// In-memory repository keyed by username.
///
/// Backs the HTTP integration tests so they run without a database;
/// enforces the same uniqueness contract as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let username = user.username.as_str().to_string();

        if users.contains_key(&username) {
            return Err(ValidationError::DuplicateUsername(username).into());
        }

        users.insert(username, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }
}
