use crate::domain::video::VideoMetadata;
use async_trait::async_trait;

/// Resolves a share link into a downloadable video descriptor.
///
/// Abstracts the extraction backend; the crate never inspects the link itself
/// beyond the supported-URL check done by the video service.
#[async_trait]
pub trait VideoMetadataRepository: Send + Sync {
    /// Fetch metadata for `url`, passing along the human-verification token.
    ///
    /// # Errors
    /// Returns a user-facing message when the backend rejects the link or is
    /// unavailable.
    async fn fetch(&self, url: &str, verification_token: &str) -> Result<VideoMetadata, String>;
}
