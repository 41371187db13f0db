use super::key_value_repository::KeyValueRepository;
use crate::error::AppResult;
use crate::infrastructure::db::{check_connection, DbPool};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct SqliteKeyValueRepository {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueRepository for SqliteKeyValueRepository {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let pool = self.pool.as_ref();
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key)
            DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now.to_rfc3339())
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        check_connection(&self.pool).await?;
        Ok(())
    }
}
