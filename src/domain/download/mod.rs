pub mod error;
pub mod handoff;
pub mod model;
pub mod service;
pub mod simulator;

pub use error::DownloadServiceError;
pub use handoff::{FileHandoff, RecordingHandoff, SaveTarget};
pub use model::{DownloadItem, DownloadStatus, TickOutcome};
pub use service::{DownloadItemView, DownloadService, DownloadSessionView, TriggerOutcome};
pub use simulator::{spawn_ticker, ProgressProfile};
