use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Uses Argon2id with the crate's default parameters (v19, m=19456 KiB,
/// t=2, p=1). The parameters and salt are embedded in the PHC output
/// string, so hashes produced under older parameters keep verifying.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a freshly generated random salt.
    ///
    /// Two calls with the same password produce different hashes; both
    /// verify against the original plaintext.
    ///
    /// # Errors
    /// * `HashingFailed` - internal hashing failure, never caused by the
    ///   plaintext itself
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns false for any mismatch, including a stored hash that is
    /// not valid PHC format. Never fails for well-formed plaintext and an
    /// arbitrary stored string.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_repeated_hashes_differ_but_both_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Fresh salt per call
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_mismatch() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_hash_output_is_phc_format() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password123").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));
    }
}
