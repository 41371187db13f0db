use super::{Identity, Plan};
use crate::domain::shared::usage_dto::UsageResponse;
use serde::{Deserialize, Serialize};

/// Response for GET /api/me
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub identity: Identity,
    pub usage: UsageResponse,
}

/// Request for POST /api/me/plan
#[derive(Debug, Serialize, Deserialize)]
pub struct ChangePlanRequest {
    pub plan: Plan,
}
