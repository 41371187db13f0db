use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::domain::admin::{AdminAuthService, AdminLoginRequest, AdminSessionResponse};
use crate::error::{AppError, AppResult};
use crate::infrastructure::auth::AdminUser;

pub struct AdminController {
    admin_service: Arc<AdminAuthService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminAuthService>) -> Self {
        Self { admin_service }
    }

    /// POST /admin/login - Exchange credentials for a session token
    pub async fn login(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<AdminLoginRequest>,
    ) -> AppResult<Json<AdminSessionResponse>> {
        let session = controller
            .admin_service
            .login(&request.email, &request.password)
            .await?;
        Ok(Json(session.into()))
    }

    /// POST /admin/logout
    pub async fn logout(
        State(controller): State<Arc<AdminController>>,
        Extension(_admin): Extension<AdminUser>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.logout().await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/admin/session - Session behind the presented token
    pub async fn get_session(
        State(controller): State<Arc<AdminController>>,
        Extension(admin): Extension<AdminUser>,
    ) -> AppResult<Json<AdminSessionResponse>> {
        let session = controller
            .admin_service
            .current()
            .await
            .filter(|session| session.token == admin.token)
            .ok_or_else(|| AppError::Unauthorized("Admin session expired".to_string()))?;
        Ok(Json(session.into()))
    }
}
