use super::jwt::AdminTokenManager;
use super::model::{AdminCredentials, AdminRole, AdminSession};
use crate::domain::shared::clock::Clock;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::AdminSessionRepository;
use std::sync::Arc;

pub struct AdminAuthService {
    session_repo: Arc<AdminSessionRepository>,
    tokens: AdminTokenManager,
    credentials: AdminCredentials,
    clock: Arc<dyn Clock>,
}

impl AdminAuthService {
    pub fn new(
        session_repo: Arc<AdminSessionRepository>,
        tokens: AdminTokenManager,
        credentials: AdminCredentials,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session_repo,
            tokens,
            credentials,
            clock,
        }
    }

    /// Check credentials and open a new session, replacing any previous one
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AdminSession> {
        if email.trim() != self.credentials.email || password != self.credentials.password {
            tracing::warn!(email = %email, "Rejected admin login");
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let (token, expires_at) = self.tokens.generate_token(&self.credentials.email, self.clock.now())?;
        let session = AdminSession {
            email: self.credentials.email.clone(),
            role: AdminRole::Admin,
            token,
            expires_at,
        };
        self.session_repo.save(&session).await?;

        tracing::info!(email = %session.email, expires_at = %session.expires_at, "Admin logged in");
        Ok(session)
    }

    /// Resolve a bearer token to the live admin session
    pub async fn authenticate(&self, token: &str) -> AppResult<AdminSession> {
        self.tokens.validate_token(token)?;

        let session = self
            .current()
            .await
            .ok_or_else(|| AppError::Unauthorized("Admin session expired".to_string()))?;

        if session.token != token {
            return Err(AppError::Unauthorized(
                "Admin session was replaced".to_string(),
            ));
        }
        Ok(session)
    }

    /// Stored session, if any and not expired. An expired one is removed.
    pub async fn current(&self) -> Option<AdminSession> {
        let session = self.session_repo.find().await?;
        if session.is_expired_at(self.clock.now()) {
            tracing::info!(email = %session.email, "Admin session expired");
            if let Err(e) = self.session_repo.remove().await {
                tracing::warn!(error = %e, "Failed to remove expired admin session");
            }
            return None;
        }
        Some(session)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.session_repo.remove().await?;
        tracing::info!("Admin logged out");
        Ok(())
    }
}
