use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
}

/// Persisted admin login. `expiresAt` is stored as epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub email: String,
    pub role: AdminRole,
    pub token: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Configured admin credentials.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// Request for POST /admin/login
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Session info returned to the admin panel
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    pub email: String,
    pub role: AdminRole,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AdminSession> for AdminSessionResponse {
    fn from(session: AdminSession) -> Self {
        Self {
            email: session.email,
            role: session.role,
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}
