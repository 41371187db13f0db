pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::ResolveVideoRequest;
pub use error::VideoServiceError;
pub use model::{VideoMetadata, VideoResolution};
pub use service::{is_supported_url, VideoService};
