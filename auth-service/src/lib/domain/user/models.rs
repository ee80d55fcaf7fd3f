use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::user::errors::ValidationError;

/// User aggregate entity.
///
/// Created once at registration and immutable afterwards. The password
/// hash never leaves the repository boundary; response types and token
/// claims are built from the other fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
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

/// Username value type
///
/// Invariant: non-empty and free of leading/trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(username: String) -> Result<Self, ValidationError> {
        if username.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if username.trim() != username {
            return Err(ValidationError::NotTrimmed { field: "username" });
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user, produced only by [`RegisterUserCommand::validate`].
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
    pub full_name: String,
}

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 72;

impl RegisterUserCommand {
    /// Validate raw registration input into a typed command.
    ///
    /// The fields arrive untyped because request bodies are not trusted
    /// to have the right shape. Rules run in a fixed order and the first
    /// failure wins:
    ///
    /// 1. username and password present and non-empty
    /// 2. both of string type
    /// 3. password length within [8, 72]
    /// 4. no leading/trailing whitespace (username checked first)
    ///
    /// `full_name` is optional, defaults to empty, and is trimmed for
    /// storage. Username and password are never mutated.
    pub fn validate(
        username: Option<Value>,
        password: Option<Value>,
        full_name: Option<String>,
    ) -> Result<Self, ValidationError> {
        if !is_present(&username) || !is_present(&password) {
            return Err(ValidationError::MissingField);
        }

        let (Some(Value::String(username)), Some(Value::String(password))) = (username, password)
        else {
            return Err(ValidationError::WrongType);
        };

        if password.len() < PASSWORD_MIN_LENGTH || password.len() > PASSWORD_MAX_LENGTH {
            return Err(ValidationError::BadLength {
                min: PASSWORD_MIN_LENGTH,
                max: PASSWORD_MAX_LENGTH,
                actual: password.len(),
            });
        }

        if username.trim() != username {
            return Err(ValidationError::NotTrimmed { field: "username" });
        }
        if password.trim() != password {
            return Err(ValidationError::NotTrimmed { field: "password" });
        }

        let full_name = full_name.unwrap_or_default().trim().to_string();

        Ok(Self {
            username: Username::new(username)?,
            password,
            full_name,
        })
    }
}

/// Absent, null, and empty-string values all count as missing.
fn is_present(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn validate(
        username: Option<Value>,
        password: Option<Value>,
    ) -> Result<RegisterUserCommand, ValidationError> {
        RegisterUserCommand::validate(username, password, None)
    }

    #[test]
    fn test_valid_registration() {
        let command = RegisterUserCommand::validate(
            Some(json!("exampleUser")),
            Some(json!("password")),
            Some("  Example User  ".to_string()),
        )
        .expect("Registration input should validate");

        assert_eq!(command.username.as_str(), "exampleUser");
        assert_eq!(command.password, "password");
        assert_eq!(command.full_name, "Example User");
    }

    #[test]
    fn test_full_name_defaults_to_empty() {
        let command = validate(Some(json!("user1")), Some(json!("password"))).unwrap();
        assert_eq!(command.full_name, "");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate(None, Some(json!("password"))).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some(json!("user1")), None).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some(json!(null)), Some(json!("password"))).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some(json!("")), Some(json!("password"))).unwrap_err(),
            ValidationError::MissingField
        );
    }

    #[test]
    fn test_non_string_fields() {
        assert_eq!(
            validate(Some(json!(42)), Some(json!("password"))).unwrap_err(),
            ValidationError::WrongType
        );
        assert_eq!(
            validate(Some(json!("user1")), Some(json!(12345678))).unwrap_err(),
            ValidationError::WrongType
        );
    }

    #[test]
    fn test_password_length_boundaries() {
        let bad_length = |n: usize| {
            validate(Some(json!("user1")), Some(json!("a".repeat(n)))).map(|c| c.password.len())
        };

        assert!(matches!(
            bad_length(7),
            Err(ValidationError::BadLength { actual: 7, .. })
        ));
        assert_eq!(bad_length(8), Ok(8));
        assert_eq!(bad_length(72), Ok(72));
        assert!(matches!(
            bad_length(73),
            Err(ValidationError::BadLength { actual: 73, .. })
        ));
    }

    #[test]
    fn test_untrimmed_password() {
        assert_eq!(
            validate(Some(json!("user1")), Some(json!("  password"))).unwrap_err(),
            ValidationError::NotTrimmed { field: "password" }
        );
    }

    #[test]
    fn test_untrimmed_username_reported_before_password() {
        assert_eq!(
            validate(Some(json!(" user1")), Some(json!("password "))).unwrap_err(),
            ValidationError::NotTrimmed { field: "username" }
        );
    }

    #[test]
    fn test_length_checked_before_whitespace() {
        // Untrimmed AND too short: length rule fires first.
        assert!(matches!(
            validate(Some(json!("user1")), Some(json!(" pass "))).unwrap_err(),
            ValidationError::BadLength { .. }
        ));
    }
}
