use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String, // Admin email
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Signs and checks admin session tokens.
///
/// Expiry is not enforced here; the session service compares it against its
/// own clock.
pub struct AdminTokenManager {
    secret: String,
    session_hours: i64,
}

impl AdminTokenManager {
    pub fn new(secret: String, session_hours: i64) -> Self {
        Self {
            secret,
            session_hours,
        }
    }

    /// Generate a token for `email` issued at `now`; returns it with its expiry
    pub fn generate_token(&self, email: &str, now: DateTime<Utc>) -> AppResult<(String, DateTime<Utc>)> {
        let expires_at = now + Duration::hours(self.session_hours);

        let claims = AdminClaims {
            sub: email.to_string(),
            role: "admin".to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to generate admin token: {}", e)))?;

        Ok((token, expires_at))
    }

    /// Check the signature and extract claims
    pub fn validate_token(&self, token: &str) -> AppResult<AdminClaims> {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Invalid admin token: {}", e)))
    }
}
