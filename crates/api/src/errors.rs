use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing 'url' query parameter")]
    MissingUrl,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::MissingUrl => (StatusCode::BAD_REQUEST, "MISSING_URL"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
