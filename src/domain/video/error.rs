use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("verification token missing")]
    MissingVerification,
    /// Message from the metadata backend, shown to the user as is.
    #[error("{0}")]
    Fetch(String),
}

impl From<VideoServiceError> for AppError {
    fn from(err: VideoServiceError) -> Self {
        match err {
            VideoServiceError::Invalid(msg) => AppError::BadRequest(msg),
            VideoServiceError::MissingVerification => AppError::VerificationIncomplete(
                "Please complete the security check first.".to_string(),
            ),
            VideoServiceError::Fetch(msg) => AppError::ExternalService(msg),
        }
    }
}
