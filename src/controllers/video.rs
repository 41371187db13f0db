use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::download::{DownloadService, DownloadSessionView};
use crate::domain::video::{ResolveVideoRequest, VideoService};
use crate::error::AppResult;

pub struct VideoController {
    video_service: Arc<VideoService>,
    download_service: Arc<DownloadService>,
}

impl VideoController {
    pub fn new(video_service: Arc<VideoService>, download_service: Arc<DownloadService>) -> Self {
        Self {
            video_service,
            download_service,
        }
    }

    /// POST /api/videos/resolve - Resolve a link and load its downloads
    pub async fn resolve(
        State(controller): State<Arc<VideoController>>,
        Json(request): Json<ResolveVideoRequest>,
    ) -> AppResult<Json<DownloadSessionView>> {
        let video = controller
            .video_service
            .resolve(&request.url, &request.verification_token)
            .await?;

        let session = controller.download_service.load_results(video).await;
        Ok(Json(session))
    }
}
