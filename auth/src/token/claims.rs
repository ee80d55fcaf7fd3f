use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session-token payload.
///
/// The JWT subject is the username; the full sanitized user record
/// (never the password hash) travels in the `user` claim so a refresh
/// can reissue without a repository lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Embedded user identity
    pub user: UserClaim,
}

/// User identity fields embedded in a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaim {
    pub id: String,
    pub username: String,
    pub full_name: String,
}

impl Claims {
    /// Create claims for a user session expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username (also becomes the JWT subject)
    /// * `full_name` - Display name
    /// * `ttl_seconds` - Seconds until the token expires
    pub fn for_user(
        user_id: impl ToString,
        username: impl Into<String>,
        full_name: impl Into<String>,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_seconds);
        let username = username.into();

        Self {
            sub: username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            user: UserClaim {
                id: user_id.to_string(),
                username,
                full_name: full_name.into(),
            },
        }
    }

    /// Override the expiration timestamp.
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Check whether the token is expired at the given instant.
    ///
    /// The boundary is inclusive: a token whose `exp` equals the current
    /// second is already expired, so a TTL of zero never grants access.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
