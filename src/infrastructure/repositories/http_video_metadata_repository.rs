use super::video_metadata_repository::VideoMetadataRepository;
use crate::domain::video::{VideoMetadata, VideoResolution};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_ERROR: &str = "Unable to load Sora video. Please check the link.";
const DEMO_VIDEO_URL: &str = "https://cdn.openai.com/sora/videos/tokyo-walk.mp4";

#[derive(Debug, Serialize)]
struct BackendRequest<'a> {
    url: &'a str,
    cf_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct BackendResponse {
    success: bool,
    video_url: Option<String>,
    error: Option<String>,
    title: Option<String>,
    thumbnail: Option<String>,
}

/// Calls the extraction backend over HTTP.
///
/// When the backend is unreachable or answers with something other than JSON
/// and simulation is enabled, a demo descriptor is produced instead so the
/// rest of the flow can still be exercised.
pub struct HttpVideoMetadataRepository {
    client: reqwest::Client,
    backend_url: String,
    simulate_on_failure: bool,
    simulation_delay: Duration,
}

impl HttpVideoMetadataRepository {
    pub fn new(backend_url: String, simulate_on_failure: bool) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            backend_url,
            simulate_on_failure,
            simulation_delay: Duration::from_millis(1500),
        }
    }

    pub fn with_simulation_delay(mut self, delay: Duration) -> Self {
        self.simulation_delay = delay;
        self
    }

    async fn call_backend(&self, url: &str, token: &str) -> Result<BackendResponse, String> {
        let response = self
            .client
            .post(&self.backend_url)
            .json(&BackendRequest {
                url,
                cf_token: token,
            })
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !is_json {
            return Err("Invalid response from backend".to_string());
        }

        response
            .json::<BackendResponse>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn simulate(&self, url: &str, token: &str) -> Result<BackendResponse, String> {
        tokio::time::sleep(self.simulation_delay).await;

        if token.trim().is_empty() {
            return Err("Security token missing".to_string());
        }

        let lower = url.to_lowercase();
        let is_file = lower.contains(".mp4") || lower.contains(".webm");
        let video_url = if is_file { url } else { DEMO_VIDEO_URL };

        Ok(BackendResponse {
            success: true,
            video_url: Some(video_url.to_string()),
            error: None,
            title: Some("Sora Video (Simulated Backend)".to_string()),
            thumbnail: Some(String::new()),
        })
    }
}

#[async_trait]
impl VideoMetadataRepository for HttpVideoMetadataRepository {
    async fn fetch(&self, url: &str, verification_token: &str) -> Result<VideoMetadata, String> {
        let url = url.trim();

        let data = match self.call_backend(url, verification_token).await {
            Ok(data) => data,
            Err(e) if self.simulate_on_failure => {
                tracing::warn!(
                    backend = %self.backend_url,
                    error = %e,
                    "Metadata backend unreachable, simulating a response"
                );
                self.simulate(url, verification_token).await?
            }
            Err(e) => {
                tracing::error!(backend = %self.backend_url, error = %e, "Metadata backend call failed");
                return Err(e);
            }
        };

        into_metadata(data)
    }
}

fn into_metadata(data: BackendResponse) -> Result<VideoMetadata, String> {
    if !data.success {
        return Err(data
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR.to_string()));
    }

    let video_url = data
        .video_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| "Backend returned success but no video URL.".to_string())?;

    Ok(VideoMetadata {
        id: STANDARD.encode(video_url.as_bytes()).chars().take(8).collect(),
        title: data
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Sora Video".to_string()),
        thumbnail_url: data.thumbnail.unwrap_or_default(),
        duration: "Unknown".to_string(),
        resolutions: vec![VideoResolution {
            label: "High Quality".to_string(),
            size: "HD".to_string(),
            format: "MP4".to_string(),
            url: video_url,
        }],
    })
}
