use async_trait::async_trait;
use savesora_backend::domain::video::{VideoMetadata, VideoResolution};
use savesora_backend::infrastructure::repositories::VideoMetadataRepository;
use serde_json::{json, Value};

pub const SORA_LINK: &str = "https://sora.chatgpt.com/g/gen_01tokyo";
pub const PRIVATE_LINK: &str = "https://sora.chatgpt.com/g/private_clip";

/// Metadata backend stand-in: two renditions for any link, except links
/// containing `private`, which fail with the backend's own message.
pub struct StubMetadataRepository;

#[async_trait]
impl VideoMetadataRepository for StubMetadataRepository {
    async fn fetch(&self, url: &str, _verification_token: &str) -> Result<VideoMetadata, String> {
        if url.contains("private") {
            return Err("This video is private".to_string());
        }

        Ok(VideoMetadata {
            id: "c29yYTEw".to_string(),
            title: "Tokyo Walk".to_string(),
            thumbnail_url: "https://cdn.example.com/tokyo.jpg".to_string(),
            duration: "0:20".to_string(),
            resolutions: vec![
                VideoResolution {
                    label: "1080p".to_string(),
                    size: "12.5 MB".to_string(),
                    format: "MP4".to_string(),
                    url: "https://cdn.example.com/tokyo-1080.mp4".to_string(),
                },
                VideoResolution {
                    label: "720p".to_string(),
                    size: "6.1 MB".to_string(),
                    format: "WEBM".to_string(),
                    url: "https://cdn.example.com/tokyo-720.webm".to_string(),
                },
            ],
        })
    }
}

pub fn resolve_request(url: &str) -> Value {
    json!({ "url": url, "verificationToken": "widget-token" })
}
