pub mod admin_session_repository;
pub mod http_video_metadata_repository;
pub mod identity_repository;
pub mod key_value_repository;
pub mod memory_key_value_repository;
pub mod sqlite_key_value_repository;
pub mod usage_repository;
pub mod video_metadata_repository;

pub use admin_session_repository::AdminSessionRepository;
pub use http_video_metadata_repository::HttpVideoMetadataRepository;
pub use identity_repository::IdentityRepository;
pub use key_value_repository::{read_json, write_json, KeyValueRepository};
pub use memory_key_value_repository::InMemoryKeyValueRepository;
pub use sqlite_key_value_repository::SqliteKeyValueRepository;
pub use usage_repository::{UsageRecord, UsageRepository};
pub use video_metadata_repository::VideoMetadataRepository;
