use super::error::DownloadServiceError;
use super::handoff::{FileHandoff, SaveTarget};
use super::model::{DownloadItem, DownloadStatus};
use super::simulator::{spawn_ticker, ProgressProfile};
use crate::domain::identity::IdentityService;
use crate::domain::quota::{plan_limit, QuotaGate};
use crate::domain::verification::VerificationGate;
use crate::domain::video::VideoMetadata;
use crate::infrastructure::repositories::UsageRepository;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Result of asking for a download.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TriggerOutcome {
    Started { index: usize, remaining: u32 },
    AlreadyRunning { index: usize },
    AlreadyComplete { index: usize },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadItemView {
    #[serde(flatten)]
    pub item: DownloadItem,
    pub label: String,
    pub size: String,
    pub format: String,
    /// Set once the item is complete.
    pub save_target: Option<SaveTarget>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadSessionView {
    pub epoch: u64,
    pub video: VideoMetadata,
    pub items: Vec<DownloadItemView>,
}

struct DownloadSession {
    epoch: u64,
    video: VideoMetadata,
    items: Vec<Arc<Mutex<DownloadItem>>>,
    tickers: Vec<JoinHandle<()>>,
}

impl DownloadSession {
    fn stop(&mut self) {
        for ticker in self.tickers.drain(..) {
            ticker.abort();
        }
    }

    async fn view(&self) -> DownloadSessionView {
        let mut items = Vec::with_capacity(self.items.len());
        for (item, resolution) in self.items.iter().zip(&self.video.resolutions) {
            let item = item.lock().await.clone();
            let save_target = (item.status == DownloadStatus::Complete).then(|| SaveTarget {
                url: resolution.url.clone(),
                filename: self.video.file_name(resolution),
            });
            items.push(DownloadItemView {
                item,
                label: resolution.label.clone(),
                size: resolution.size.clone(),
                format: resolution.format.clone(),
                save_target,
            });
        }

        DownloadSessionView {
            epoch: self.epoch,
            video: self.video.clone(),
            items,
        }
    }
}

/// Gated download workflow over the current result set.
///
/// A trigger runs quota check, then human verification, then starts the
/// simulated transfer and charges one download. Every reset or newly loaded
/// result set bumps the epoch; work that resumes in an older epoch is dropped.
pub struct DownloadService {
    identity_service: Arc<IdentityService>,
    quota: Arc<QuotaGate>,
    usage_repo: Arc<UsageRepository>,
    verification: Arc<VerificationGate>,
    handoff: Arc<dyn FileHandoff>,
    profile: ProgressProfile,
    epoch: Arc<AtomicU64>,
    session: Mutex<Option<DownloadSession>>,
}

impl DownloadService {
    pub fn new(
        identity_service: Arc<IdentityService>,
        quota: Arc<QuotaGate>,
        usage_repo: Arc<UsageRepository>,
        verification: Arc<VerificationGate>,
        handoff: Arc<dyn FileHandoff>,
        profile: ProgressProfile,
    ) -> Self {
        Self {
            identity_service,
            quota,
            usage_repo,
            verification,
            handoff,
            profile,
            epoch: Arc::new(AtomicU64::new(0)),
            session: Mutex::new(None),
        }
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Replace the result set with a freshly resolved video; every rendition starts idle.
    pub async fn load_results(&self, video: VideoMetadata) -> DownloadSessionView {
        let mut session = self.session.lock().await;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(mut previous) = session.take() {
            previous.stop();
        }

        let items = (0..video.resolutions.len())
            .map(|index| Arc::new(Mutex::new(DownloadItem::new(index))))
            .collect();

        tracing::info!(
            epoch,
            video_id = %video.id,
            renditions = video.resolutions.len(),
            "Result set loaded"
        );

        let loaded = DownloadSession {
            epoch,
            video,
            items,
            tickers: Vec::new(),
        };
        let view = loaded.view().await;
        *session = Some(loaded);
        view
    }

    /// Drop the result set, stop all transfers and invalidate pending triggers.
    pub async fn reset(&self) {
        let mut session = self.session.lock().await;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(mut previous) = session.take() {
            previous.stop();
        }
        tracing::info!(epoch, "Download flow reset");
    }

    pub async fn snapshot(&self) -> Option<DownloadSessionView> {
        let session = self.session.lock().await;
        match session.as_ref() {
            Some(session) => Some(session.view().await),
            None => None,
        }
    }

    pub async fn trigger(&self, index: usize) -> Result<TriggerOutcome, DownloadServiceError> {
        let (epoch, item, target) = {
            let session = self.session.lock().await;
            let session = session.as_ref().ok_or(DownloadServiceError::NoResults)?;
            let item = session
                .items
                .get(index)
                .cloned()
                .ok_or(DownloadServiceError::UnknownItem(index))?;
            let resolution = session
                .video
                .resolutions
                .get(index)
                .ok_or(DownloadServiceError::UnknownItem(index))?;
            let target = SaveTarget {
                url: resolution.url.clone(),
                filename: session.video.file_name(resolution),
            };
            (session.epoch, item, target)
        };

        let status = item.lock().await.status;
        if let Some(outcome) = settled_outcome(status, index) {
            tracing::debug!(index, ?status, "Download already started, ignoring trigger");
            return Ok(outcome);
        }

        // 1. Quota before verification, so a check is never spent on an exhausted quota
        let identity = self.identity_service.current().await;
        if !self.quota.can_download(&identity).await {
            tracing::info!(index, plan = %identity.plan(), "Download limit reached");
            return Err(DownloadServiceError::LimitReached {
                logged_in: identity.is_logged_in(),
            });
        }

        // 2. Human verification
        self.verification.challenge().await?;

        // 3. Start the transfer, unless the flow moved on while we waited
        {
            let mut session = self.session.lock().await;
            let session = match session.as_mut() {
                Some(session) if session.epoch == epoch && self.current_epoch() == epoch => session,
                _ => {
                    tracing::info!(index, epoch, "Verification finished after reset, discarding");
                    return Err(DownloadServiceError::Abandoned);
                }
            };

            let mut guard = item.lock().await;
            if !guard.begin() {
                let status = guard.status;
                return Ok(settled_outcome(status, index)
                    .unwrap_or(TriggerOutcome::AlreadyRunning { index }));
            }
            drop(guard);

            session.tickers.push(spawn_ticker(
                item.clone(),
                self.epoch.clone(),
                epoch,
                self.profile.clone(),
                self.handoff.clone(),
                target,
            ));
        }

        // 4. Charge at trigger time
        let remaining = match self.usage_repo.increment(identity.usage_scope()).await {
            Ok(used) => plan_limit(identity.plan()).saturating_sub(used),
            Err(e) => {
                tracing::error!(index, error = %e, "Failed to record download usage");
                self.quota.remaining(&identity).await
            }
        };

        tracing::info!(index, epoch, remaining, "Download started");
        Ok(TriggerOutcome::Started { index, remaining })
    }
}

fn settled_outcome(status: DownloadStatus, index: usize) -> Option<TriggerOutcome> {
    match status {
        DownloadStatus::Idle => None,
        DownloadStatus::Running => Some(TriggerOutcome::AlreadyRunning { index }),
        DownloadStatus::Complete => Some(TriggerOutcome::AlreadyComplete { index }),
    }
}
