//! File upload route
//!
//! Accepts a single multipart field named `file`. Other fields are ignored.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use portfolio_shared::types::UploadResponse;
use tracing::debug;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create upload routes
pub fn upload_routes(max_file_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload_file))
        .layer(DefaultBodyLimit::max(max_file_bytes + MULTIPART_OVERHEAD_BYTES))
}

/// POST /api/upload
async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<UploadResponse>> {
    let mut multipart =
        multipart.map_err(|_| ApiError::BadRequest("Expected multipart/form-data".to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&state, e))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_default();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&state, e))?;

        debug!(by = %auth.username, content_type = %content_type, bytes = data.len(), "Upload received");

        let response = state.uploads.store(&content_type, &data).await?;
        return Ok(Json(response));
    }

    Err(ApiError::BadRequest("No file provided".to_string()))
}

fn multipart_error(state: &AppState, err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        state.uploads.too_large()
    } else {
        ApiError::BadRequest(err.body_text())
    }
}
