//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::request::ApiResponse;
use crate::validation::ValidationResult;

pub type Result<T> = std::result::Result<T, AppError>;

pub const VALIDATION_FAILED_MESSAGE: &str = "Please check your input and try again.";
pub const SERVER_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.messages().join("; "))]
    Validation(ValidationResult),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiResponse::error(msg)),
            AppError::Validation(result) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::validation_failed(VALIDATION_FAILED_MESSAGE, result.messages()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::error(msg)),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(SERVER_ERROR_MESSAGE),
                )
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(SERVER_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
