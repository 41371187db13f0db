use super::key_value_repository::{read_json, write_json, KeyValueRepository};
use crate::domain::identity::UsageScope;
use crate::domain::shared::clock::{day_key, Clock};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Stored daily counter. A record for any other day counts as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub period_key: String,
    pub count: u32,
}

/// Daily download ledger backed by the key-value store.
pub struct UsageRepository {
    store: Arc<dyn KeyValueRepository>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl UsageRepository {
    pub fn new(store: Arc<dyn KeyValueRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Current period key for the ledger.
    pub fn period_key(&self) -> String {
        day_key(self.clock.today())
    }

    /// Get today's download count for a scope. Never writes.
    pub async fn get_count(&self, scope: UsageScope) -> u32 {
        let today = self.period_key();
        self.load(scope)
            .await
            .filter(|record| record.period_key == today)
            .map(|record| record.count)
            .unwrap_or(0)
    }

    /// Count one download for today and return the new total.
    pub async fn increment(&self, scope: UsageScope) -> AppResult<u32> {
        let _guard = self.write_lock.lock().await;

        let today = self.period_key();
        let current = self
            .load(scope)
            .await
            .filter(|record| record.period_key == today)
            .map(|record| record.count)
            .unwrap_or(0);

        let record = UsageRecord {
            period_key: today,
            count: current.saturating_add(1),
        };
        write_json(self.store.as_ref(), scope.storage_key(), &record).await?;

        tracing::debug!(
            scope = scope.storage_key(),
            period = %record.period_key,
            count = record.count,
            "Usage incremented"
        );

        Ok(record.count)
    }

    async fn load(&self, scope: UsageScope) -> Option<UsageRecord> {
        read_json(self.store.as_ref(), scope.storage_key()).await
    }
}
