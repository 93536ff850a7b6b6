use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("version must be a valid semver string")]
    InvalidVersion,
    #[error("database connection failed")]
    Connection(#[source] sqlx::Error),
    #[error("failed to persist model metadata")]
    Insert(#[source] sqlx::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::InvalidPayload | ServiceError::InvalidVersion => StatusCode::BAD_REQUEST,
            ServiceError::Connection(err) => {
                error!(error = %err, "failed to reach metadata store");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Insert(err) => {
                error!(error = %err, "metadata insert rejected by store");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
