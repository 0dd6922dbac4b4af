//! Authentication: JWT tokens, password hashing and the bearer extractor.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Authorization: Bearer <token>                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AuthUser extractor (FromRequestParts)                                  │
//! │       ├── header missing / not Bearer  → 401 Access denied              │
//! │       ├── token invalid or expired     → 403 Invalid token              │
//! │       └── valid → AuthUser { id, email } handed to the handler          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The token carries the user id and email only; profile data is always
//! fetched fresh so a stale token never serves stale addresses.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

// =============================================================================
// JWT
// =============================================================================

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i64,

    /// Account email at issue time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager.
pub struct JwtManager {
    secret: String,
    lifetime_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager.
    pub fn new(secret: String, lifetime_secs: i64) -> Self {
        JwtManager {
            secret,
            lifetime_secs,
        }
    }

    /// Generate a signed token for an account.
    pub fn generate_token(&self, user_id: i64, email: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.lifetime_secs);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("Failed to generate token: {e}")))
    }

    /// Validate and decode a token. Expiry is checked by the library.
    pub fn validate_token(&self, token: &str) -> Result<Claims, ApiError> {
        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| ApiError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

/// Extract bearer token from an authorization header value.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

// =============================================================================
// Password Hashing
// =============================================================================

/// Hashes a password with argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))
}

/// Verifies a password against a stored hash.
///
/// An unparseable stored hash counts as a mismatch, not a server error:
/// login must never leak which part failed.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

// =============================================================================
// Extractor
// =============================================================================

/// The authenticated caller, extracted from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = extract_bearer_token(header).ok_or(ApiError::MissingToken)?;

        let claims = state.jwt.validate_token(token)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_roundtrip() {
        let manager = JwtManager::new("test-secret".to_string(), 3600);

        let token = manager.generate_token(42, "ana@example.com").unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "ana@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtManager::new("secret-a".to_string(), 3600);
        let verifier = JwtManager::new("secret-b".to_string(), 3600);

        let token = issuer.generate_token(1, "ana@example.com").unwrap();
        assert!(matches!(
            verifier.validate_token(&token),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative lifetime issues an already-expired token
        let manager = JwtManager::new("test-secret".to_string(), -3600);
        let token = manager.generate_token(1, "ana@example.com").unwrap();

        assert!(matches!(
            manager.validate_token(&token),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token(""), None);
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("demo123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("demo123", &hash));
        assert!(!verify_password("demo124", &hash));
        assert!(!verify_password("demo123", "not-a-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("demo123").unwrap();
        let b = hash_password("demo123").unwrap();
        assert_ne!(a, b);
    }
}
