//! API Error Mapping
//!
//! All handler failures become a JSON `{error}` body; the client never sees
//! a partial success payload or a bare status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the prediction endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("{0}")]
    Validation(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ApiError {
    /// Label used for the request outcome counter.
    pub fn metric_label(&self) -> &'static str {
        match self {
            ApiError::ModelUnavailable => "unavailable",
            ApiError::Validation(_) => "validation_error",
            ApiError::Inference(_) => "inference_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelUnavailable | ApiError::Inference(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
