use crate::domain::verification::VerificationError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DownloadServiceError {
    #[error("no video has been resolved yet")]
    NoResults,
    #[error("no download at position {0}")]
    UnknownItem(usize),
    #[error("daily download limit reached")]
    LimitReached { logged_in: bool },
    #[error(transparent)]
    Verification(#[from] VerificationError),
    #[error("the download flow was reset while waiting")]
    Abandoned,
}

impl From<DownloadServiceError> for AppError {
    fn from(err: DownloadServiceError) -> Self {
        match err {
            DownloadServiceError::NoResults => {
                AppError::NotFound("Resolve a video before downloading".to_string())
            }
            DownloadServiceError::UnknownItem(index) => {
                AppError::NotFound(format!("No download at position {}", index))
            }
            DownloadServiceError::LimitReached { logged_in: false } => AppError::LimitReached(
                "Log in to keep downloading today".to_string(),
            ),
            DownloadServiceError::LimitReached { logged_in: true } => AppError::LimitReached(
                "Upgrade your plan to keep downloading today".to_string(),
            ),
            DownloadServiceError::Verification(e) => AppError::from(e),
            DownloadServiceError::Abandoned => {
                AppError::Conflict("The download flow was reset".to_string())
            }
        }
    }
}
