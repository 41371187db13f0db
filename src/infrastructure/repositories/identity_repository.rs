use super::key_value_repository::{read_json, write_json, KeyValueRepository};
use crate::domain::identity::Account;
use crate::error::AppResult;
use std::sync::Arc;

const USER_KEY: &str = "savesora_user";

/// Persists the single active account on this device.
pub struct IdentityRepository {
    store: Arc<dyn KeyValueRepository>,
}

impl IdentityRepository {
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self { store }
    }

    /// Stored account, if any. A corrupt record reads as logged out.
    pub async fn find_current(&self) -> Option<Account> {
        read_json(self.store.as_ref(), USER_KEY).await
    }

    pub async fn save(&self, account: &Account) -> AppResult<()> {
        write_json(self.store.as_ref(), USER_KEY, account).await
    }

    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(USER_KEY).await
    }
}
