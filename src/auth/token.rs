use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token payload. `id` is the application user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: i64, expiry_hours: u64) -> Result<Self, TokenError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::Generation(format!("token lifetime of {} hours is out of range", expiry_hours))
            })?
            .timestamp();

        Ok(Self {
            id,
            iat: now.timestamp(),
            exp,
        })
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    Generation(String),

    #[error("Invalid JWT token: {0}")]
    Invalid(String),
}

/// Signs and verifies HS256 bearer tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: u64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_hours: u64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        })
    }

    /// Issue a token for the given application user id
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.sign(&Claims::new(user_id, self.expiry_hours)?)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let tokens = TokenService::new("secret", 1).unwrap();
        let token = tokens.issue(42).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.id, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let ours = TokenService::new("secret", 1).unwrap();
        let theirs = TokenService::new("other-secret", 1).unwrap();

        let token = theirs.issue(1).unwrap();
        assert!(matches!(ours.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("secret", 1).unwrap();
        let now = Utc::now().timestamp();
        let expired = Claims {
            id: 7,
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = tokens.sign(&expired).unwrap();
        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn rejects_tampered_token() {
        let tokens = TokenService::new("secret", 1).unwrap();
        let mut token = tokens.issue(3).unwrap();
        token.push('x');

        assert!(tokens.verify(&token).is_err());
        assert!(tokens.verify("not-a-jwt").is_err());
    }

    #[test]
    fn oversized_lifetime_is_an_error_not_a_panic() {
        let tokens = TokenService::new("secret", 10_000_000_000).unwrap();
        assert!(matches!(tokens.issue(1), Err(TokenError::Generation(_))));
        assert!(Claims::new(1, u64::MAX).is_err());
    }

    #[test]
    fn lifetime_sets_expiry() {
        let claims = Claims::new(1, 8760).unwrap();
        assert_eq!(claims.exp - claims.iat, 8760 * 3600);
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(TokenService::new("", 1), Err(TokenError::InvalidSecret)));
    }
}
