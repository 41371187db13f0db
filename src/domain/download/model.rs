use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Idle,
    Running,
    Complete,
}

/// What a single tick did to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Progressed,
    /// Progress reached 100 on this tick. Reported exactly once per item.
    Completed,
    /// The item was not running; nothing changed.
    Ignored,
}

/// Progress state of one rendition in the current result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadItem {
    pub index: usize,
    pub progress: f64,
    pub speed_label: String,
    pub status: DownloadStatus,
}

impl DownloadItem {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            progress: 0.0,
            speed_label: String::new(),
            status: DownloadStatus::Idle,
        }
    }

    /// Move an idle item to running. Any other state is left alone.
    pub fn begin(&mut self) -> bool {
        if self.status != DownloadStatus::Idle {
            return false;
        }
        self.status = DownloadStatus::Running;
        self.progress = 1.0;
        self.speed_label = "Connecting...".to_string();
        true
    }

    /// Apply one tick. `step` is added to progress and `speed_mbps` becomes
    /// the display label; reaching 100 clamps and completes the item.
    pub fn advance(&mut self, step: f64, speed_mbps: f64) -> TickOutcome {
        if self.status != DownloadStatus::Running {
            return TickOutcome::Ignored;
        }

        self.speed_label = format!("{:.1} MB/s", speed_mbps);
        self.progress += step.max(0.0);

        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.status = DownloadStatus::Complete;
            TickOutcome::Completed
        } else {
            TickOutcome::Progressed
        }
    }
}
