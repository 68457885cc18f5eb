//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to `{ "error", "details"? }` HTTP responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use portfolio_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Schema rejection, one message per offending field
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Too many requests")]
    RateLimited { retry_after_secs: u64 },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match self {
            ApiError::Validation(details) => ("Validation failed".to_string(), Some(details)),
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                (msg, None)
            }
            ApiError::RateLimited { retry_after_secs } => {
                let body = Json(ErrorResponse {
                    error: "Too many login attempts, please try again later".to_string(),
                    details: None,
                });
                let mut response = (status, body).into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
                return response;
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                ("Internal server error".to_string(), None)
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                ("Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
