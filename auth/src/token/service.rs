use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed session tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a symmetric secret; the payload
/// is always a [`Claims`] record.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a new token service from the signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, enforcing signature and expiry.
    ///
    /// Expiry is checked with zero leeway and an inclusive boundary: a
    /// token is valid strictly before its `exp` second, so a token issued
    /// with a TTL of zero is already expired.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Expired` - `exp` is now or in the past
    /// * `Malformed` - Token cannot be parsed or misses required claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        // jsonwebtoken only rejects `exp` strictly in the past; a token
        // expiring this very second must be refused too.
        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Claims;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = TokenService::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user("user123", "alice", "Alice Example", 3600);

        let token = tokens.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = tokens.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_malformed_token() {
        let tokens = TokenService::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = tokens.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret_is_invalid_signature() {
        let signer = TokenService::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenService::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = Claims::for_user("user123", "alice", "", 3600);
        let token = signer.issue(&claims).expect("Failed to issue token");

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_verify_expired_token() {
        let tokens = TokenService::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user("user123", "alice", "", 3600)
            .with_expiration(chrono::Utc::now().timestamp() - 3600);
        let token = tokens.issue(&claims).expect("Failed to issue token");

        let result = tokens.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_expiry_takes_effect_without_leeway() {
        let tokens = TokenService::new(b"my_secret_key_at_least_32_bytes_long!");

        // One second past expiry is enough; the default 60s leeway would
        // have let this token through.
        let claims = Claims::for_user("user123", "alice", "", 0)
            .with_expiration(chrono::Utc::now().timestamp() - 2);
        let token = tokens.issue(&claims).expect("Failed to issue token");

        let result = tokens.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_zero_ttl_token_is_already_expired() {
        let tokens = TokenService::new(b"my_secret_key_at_least_32_bytes_long!");

        // `exp` equals the issue second; verification immediately after
        // must still refuse the token.
        let claims = Claims::for_user("user123", "alice", "", 0);
        let token = tokens.issue(&claims).expect("Failed to issue token");

        let result = tokens.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
