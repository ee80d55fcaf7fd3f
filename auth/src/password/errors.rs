use thiserror::Error;

/// Error type for password operations.
///
/// Only hashing can fail; verification treats every failure mode
/// (including an unparseable stored hash) as a mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
