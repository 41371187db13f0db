use crate::error::AppResult;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Durable, device-local store of string-keyed JSON blobs.
///
/// Every key is independent: readers and writers do plain read-modify-write,
/// so two processes writing the same key race and the last write wins.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key` in a single write.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Read and decode a JSON blob.
///
/// A missing key, a failing read and a malformed blob all come back as `None`;
/// corruption is logged and otherwise treated like an absent record.
pub async fn read_json<T: DeserializeOwned>(repo: &dyn KeyValueRepository, key: &str) -> Option<T> {
    let raw = match repo.get(key).await {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Store read failed, using empty value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Malformed stored JSON, ignoring it");
            None
        }
    }
}

pub async fn write_json<T: Serialize + ?Sized>(
    repo: &dyn KeyValueRepository,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    repo.set(key, &raw).await
}
