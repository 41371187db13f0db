use super::plans::plan_limit;
use crate::domain::identity::Identity;
use crate::domain::shared::clock::Clock;
use crate::domain::shared::usage_dto::{UsageLimits, UsageResponse, UsageStats};
use crate::infrastructure::repositories::UsageRepository;
use std::sync::Arc;

/// Decides whether an identity may start another download today.
///
/// Reads only; charging a download is the ledger's job.
pub struct QuotaGate {
    usage_repo: Arc<UsageRepository>,
    clock: Arc<dyn Clock>,
}

impl QuotaGate {
    pub fn new(usage_repo: Arc<UsageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { usage_repo, clock }
    }

    pub async fn remaining(&self, identity: &Identity) -> u32 {
        let limit = plan_limit(identity.plan());
        let used = self.usage_repo.get_count(identity.usage_scope()).await;
        limit.saturating_sub(used)
    }

    pub async fn can_download(&self, identity: &Identity) -> bool {
        self.remaining(identity).await > 0
    }

    pub async fn usage_summary(&self, identity: &Identity) -> UsageResponse {
        let plan = identity.plan();
        let limit = plan_limit(plan);
        let used = self.usage_repo.get_count(identity.usage_scope()).await;
        let remaining = limit.saturating_sub(used);

        UsageResponse {
            period: "daily".to_string(),
            period_key: self.usage_repo.period_key(),
            plan,
            usage: UsageStats {
                downloads: used,
                remaining,
            },
            limits: UsageLimits { downloads: limit },
            can_download: remaining > 0,
            resets_at: self.clock.next_reset(),
        }
    }
}
