use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::schedule::Rejection;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Credit limit: {0}")]
    CreditLimit(String),
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Conflict { .. } => AppError::Conflict(rejection.to_string()),
            Rejection::CreditCeiling { .. } => AppError::CreditLimit(rejection.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::CreditLimit(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Catalog(msg) => {
                error!("catalog error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Course catalog is unavailable".to_string(),
                )
            }
            AppError::Http(e) => {
                error!("http error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Course catalog is unavailable".to_string(),
                )
            }
            AppError::Io(e) => {
                error!("io error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
