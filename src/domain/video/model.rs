use serde::{Deserialize, Serialize};

/// Resolved video descriptor returned by the metadata backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub resolutions: Vec<VideoResolution>,
}

/// One downloadable rendition, e.g. `1080p / 12.5 MB / MP4`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoResolution {
    pub label: String,
    pub size: String,
    pub format: String,
    pub url: String,
}

impl VideoMetadata {
    /// Suggested file name for a rendition of this video.
    pub fn file_name(&self, resolution: &VideoResolution) -> String {
        let extension = match resolution.format.trim() {
            "" => "mp4".to_string(),
            format => format.to_lowercase(),
        };
        format!("SaveSora_{}.{}", self.id, extension)
    }
}
