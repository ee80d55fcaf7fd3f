use thiserror::Error;

/// Registration input rejections. All caller-fixable.
///
/// `NotTrimmed` maps to 422 at the HTTP boundary, everything else to 400.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Must include username and password")]
    MissingField,

    #[error("Username and password must be strings")]
    WrongType,

    #[error("Password must be between {min} and {max} characters")]
    BadLength { min: usize, max: usize, actual: usize },

    #[error("Field: '{field}' cannot start or end with whitespace")]
    NotTrimmed { field: &'static str },

    #[error("The username already exists")]
    DuplicateUsername(String),
}

/// Authentication rejections.
///
/// Every variant collapses to a 401 with the same message at the HTTP
/// boundary; the distinction exists for logging only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::InvalidSignature => AuthError::InvalidSignature,
            auth::TokenError::Expired => AuthError::Expired,
            auth::TokenError::Malformed(msg) => AuthError::Malformed(msg),
            auth::TokenError::EncodingFailed(msg) => AuthError::Malformed(msg),
        }
    }
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
