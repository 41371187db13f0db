use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::admin::AdminAuthService, error::AppError};

/// Admin context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
    pub token: String,
}

/// Bearer-token check for admin routes
pub async fn admin_auth_middleware(
    State(admin_service): State<Arc<AdminAuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let session = admin_service.authenticate(token).await?;

    request.extensions_mut().insert(AdminUser {
        email: session.email,
        token: session.token,
    });

    Ok(next.run(request).await)
}
