use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// File the client should save once a simulated transfer finishes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveTarget {
    pub url: String,
    pub filename: String,
}

/// Terminal side effect of a finished download: hand the file to whatever
/// performs the real save on the client.
#[async_trait]
pub trait FileHandoff: Send + Sync {
    async fn hand_off(&self, target: SaveTarget);
}

/// Keeps every hand-off so clients can pick them up, and logs each one.
#[derive(Default)]
pub struct RecordingHandoff {
    delivered: Mutex<Vec<SaveTarget>>,
}

impl RecordingHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn delivered(&self) -> Vec<SaveTarget> {
        self.delivered.lock().await.clone()
    }
}

#[async_trait]
impl FileHandoff for RecordingHandoff {
    async fn hand_off(&self, target: SaveTarget) {
        tracing::info!(url = %target.url, filename = %target.filename, "File handed off for saving");
        self.delivered.lock().await.push(target);
    }
}
