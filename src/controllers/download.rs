use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::download::{DownloadService, DownloadSessionView, TriggerOutcome};
use crate::error::{AppError, AppResult};

pub struct DownloadController {
    download_service: Arc<DownloadService>,
}

impl DownloadController {
    pub fn new(download_service: Arc<DownloadService>) -> Self {
        Self { download_service }
    }

    /// GET /api/downloads - Current result set with per-item progress
    pub async fn list(
        State(controller): State<Arc<DownloadController>>,
    ) -> AppResult<Json<DownloadSessionView>> {
        controller
            .download_service
            .snapshot()
            .await
            .map(Json)
            .ok_or_else(|| AppError::NotFound("No video has been resolved".to_string()))
    }

    /// POST /api/downloads/:index - Quota check, verification, then start
    pub async fn trigger(
        State(controller): State<Arc<DownloadController>>,
        Path(index): Path<usize>,
    ) -> AppResult<Json<TriggerOutcome>> {
        let outcome = controller.download_service.trigger(index).await?;
        Ok(Json(outcome))
    }

    /// POST /api/downloads/reset - Convert another video
    pub async fn reset(State(controller): State<Arc<DownloadController>>) -> StatusCode {
        controller.download_service.reset().await;
        StatusCode::NO_CONTENT
    }
}
