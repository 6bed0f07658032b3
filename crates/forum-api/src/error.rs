use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_persist::PersistError;
use forum_types::{ErrorBody, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persist(PersistError),
}

impl From<PersistError> for ApiError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::Validation(e) => ApiError::Validation(e),
            other => ApiError::Persist(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(ref e) => {
                tracing::info!("Message rejected: {}", e);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Persist(ref e) => {
                tracing::error!("Persistence error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
