use crate::domain::identity::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for GET /api/usage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageResponse {
    pub period: String,
    pub period_key: String,
    pub plan: Plan,
    pub usage: UsageStats,
    pub limits: UsageLimits,
    pub can_download: bool,
    pub resets_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageStats {
    pub downloads: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageLimits {
    pub downloads: u32,
}
