use aquasync_api::models::ParseClockError;
use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything a remote exchange can fail with, mapped to user-facing
/// categories at the call site. `Validation` never reaches the network.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("fields failed validation, nothing was sent")]
    Validation,

    #[error("credentials or token rejected")]
    Unauthorized,

    #[error("no such device or user on the registry")]
    NotFound,

    #[error("the service could not read the request")]
    BadRequest,

    #[error("the remote service failed")]
    ServerError,

    #[error("unexpected status from the service: {0}")]
    Unknown(u16),

    #[error("unreadable schedule from the registry: {0}")]
    Payload(#[from] ParseClockError),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// Single place where response statuses turn into the taxonomy above.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::BAD_REQUEST => ApiError::BadRequest,
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::ServerError,
            other => ApiError::Unknown(other.as_u16()),
        }
    }
}
