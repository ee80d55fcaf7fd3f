//! Authentication utilities library
//!
//! Provides the cryptographic half of the credential service:
//! - Password hashing (Argon2id)
//! - Signed, expiring session tokens (JWT, HS256)
//!
//! The service crate defines its own repository and validation logic and
//! composes these primitives; nothing in here touches storage or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{TokenService, Claims};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "alice", "Alice Example", 3600);
//! let token = tokens.issue(&claims).unwrap();
//! let decoded: Claims = tokens.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
pub use token::UserClaim;
