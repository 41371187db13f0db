use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown field {section}.{field}")]
    UnknownField { section: String, field: String },
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<AppError> for SettingsError {
    fn from(err: AppError) -> Self {
        SettingsError::Dependency(err.to_string())
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::UnknownField { section, field } => {
                AppError::BadRequest(format!("Unknown setting {}.{}", section, field))
            }
            SettingsError::Invalid(msg) => AppError::BadRequest(msg),
            SettingsError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
