use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Malformed request path: {0}")]
    MalformedPath(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::MalformedBody(_) | ServiceError::MalformedPath(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST is not a valid IP address: {0:?}")]
    InvalidHost(String),
}
