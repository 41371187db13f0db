use super::key_value_repository::{read_json, write_json, KeyValueRepository};
use crate::domain::admin::AdminSession;
use crate::error::AppResult;
use std::sync::Arc;

const ADMIN_SESSION_KEY: &str = "savesora_admin_session";

pub struct AdminSessionRepository {
    store: Arc<dyn KeyValueRepository>,
}

impl AdminSessionRepository {
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self { store }
    }

    pub async fn find(&self) -> Option<AdminSession> {
        read_json(self.store.as_ref(), ADMIN_SESSION_KEY).await
    }

    pub async fn save(&self, session: &AdminSession) -> AppResult<()> {
        write_json(self.store.as_ref(), ADMIN_SESSION_KEY, session).await
    }

    pub async fn remove(&self) -> AppResult<()> {
        self.store.remove(ADMIN_SESSION_KEY).await
    }
}
