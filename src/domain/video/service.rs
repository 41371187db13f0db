use super::error::VideoServiceError;
use super::model::VideoMetadata;
use crate::infrastructure::repositories::VideoMetadataRepository;
use moka::future::Cache;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

const FALLBACK_ERROR: &str = "Failed to fetch video details.";

static SORA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?(?:sora\.chatgpt\.com|sora\.com)/.+")
        .expect("regex to match Sora share links")
});

static DIRECT_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://.*\.(mp4|webm|mov|mkv)(\?.*)?$")
        .expect("regex to match direct video file links")
});

/// Whether `url` is a Sora share link or a direct video file.
pub fn is_supported_url(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && (SORA_LINK.is_match(url) || DIRECT_FILE.is_match(url))
}

pub struct VideoService {
    metadata_repo: Arc<dyn VideoMetadataRepository>,
    cache: Option<Cache<String, VideoMetadata>>,
}

impl VideoService {
    pub fn new(metadata_repo: Arc<dyn VideoMetadataRepository>, cache_enabled: bool) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(100)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            metadata_repo,
            cache,
        }
    }

    /// Resolve a share link into a downloadable descriptor.
    ///
    /// The link must be supported and a verification token present before
    /// the backend is contacted.
    pub async fn resolve(
        &self,
        url: &str,
        verification_token: &str,
    ) -> Result<VideoMetadata, VideoServiceError> {
        let url = url.trim();
        if !is_supported_url(url) {
            return Err(VideoServiceError::Invalid(
                "Please enter a valid Sora link or direct MP4 URL".to_string(),
            ));
        }
        if verification_token.trim().is_empty() {
            return Err(VideoServiceError::MissingVerification);
        }

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(url).await {
                tracing::info!(url = %url, video_id = %cached.id, "Metadata cache hit");
                return Ok(cached);
            }
        }

        let metadata = self
            .metadata_repo
            .fetch(url, verification_token)
            .await
            .map_err(|message| {
                tracing::warn!(url = %url, error = %message, "Video metadata fetch failed");
                if message.trim().is_empty() {
                    VideoServiceError::Fetch(FALLBACK_ERROR.to_string())
                } else {
                    VideoServiceError::Fetch(message)
                }
            })?;

        tracing::info!(
            url = %url,
            video_id = %metadata.id,
            renditions = metadata.resolutions.len(),
            "Video resolved"
        );

        if let Some(cache) = &self.cache {
            cache.insert(url.to_string(), metadata.clone()).await;
        }

        Ok(metadata)
    }
}
