use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::identity::{Account, ChangePlanRequest, IdentityService, MeResponse};
use crate::domain::quota::QuotaGate;
use crate::domain::shared::UsageResponse;
use crate::error::AppResult;

pub struct IdentityController {
    identity_service: Arc<IdentityService>,
    quota: Arc<QuotaGate>,
}

impl IdentityController {
    pub fn new(identity_service: Arc<IdentityService>, quota: Arc<QuotaGate>) -> Self {
        Self {
            identity_service,
            quota,
        }
    }

    /// GET /api/me - Current identity and today's usage
    pub async fn get_me(
        State(controller): State<Arc<IdentityController>>,
    ) -> AppResult<Json<MeResponse>> {
        let identity = controller.identity_service.current().await;
        let usage = controller.quota.usage_summary(&identity).await;
        Ok(Json(MeResponse { identity, usage }))
    }

    /// GET /api/usage - Today's download usage for the active identity
    pub async fn get_usage(
        State(controller): State<Arc<IdentityController>>,
    ) -> AppResult<Json<UsageResponse>> {
        let identity = controller.identity_service.current().await;
        Ok(Json(controller.quota.usage_summary(&identity).await))
    }

    /// POST /auth/login - Start a free-plan account session
    pub async fn login(
        State(controller): State<Arc<IdentityController>>,
    ) -> AppResult<Json<Account>> {
        let account = controller.identity_service.login().await?;
        Ok(Json(account))
    }

    /// POST /auth/logout
    pub async fn logout(
        State(controller): State<Arc<IdentityController>>,
    ) -> AppResult<StatusCode> {
        controller.identity_service.logout().await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/me/plan - Switch the account's plan
    pub async fn change_plan(
        State(controller): State<Arc<IdentityController>>,
        Json(request): Json<ChangePlanRequest>,
    ) -> AppResult<Json<Account>> {
        let account = controller.identity_service.upgrade_plan(request.plan).await?;
        Ok(Json(account))
    }
}
