//! Token authentication service
//!
//! The host platform owns registration, login and token issuance; this
//! service only verifies the bearer tokens the API is accessed with.

#[cfg(test)]
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
#[cfg(test)]
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Display name
    pub name: String,
    /// Role (`user` / `admin`)
    pub role: String,
    /// Expiry (unix timestamp)
    pub exp: i64,
    /// Issued at (unix timestamp)
    pub iat: i64,
}

/// Token issuing and verification
pub struct AuthService;

impl AuthService {
    /// Verify a token and return its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
impl AuthService {
    /// Mint a token the way the host platform would; tests only
    pub fn issue_token(
        user_id: i64,
        name: &str,
        role: &str,
        secret: &str,
        expiry_hours: i64,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token = AuthService::issue_token(42, "alice", "admin", SECRET, 1).unwrap();
        let claims = AuthService::verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = AuthService::issue_token(42, "alice", "user", SECRET, 1).unwrap();
        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();

        assert!(matches!(err, AppError::InvalidToken));
    }
}
