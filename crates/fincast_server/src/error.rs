use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Custom error types for the fincast API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] fincast_core::ValidationError),

    #[error("Invalid parameter: {field} - {message}")]
    InvalidParameter { field: String, message: String },

    #[error("Internal server error")]
    InternalError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Validation(_) | ApiError::InvalidParameter { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::InternalError => {
                tracing::error!("internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
