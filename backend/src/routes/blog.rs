//! Blog post routes
//!
//! Drafts are listed alongside published posts; filtering is left to the
//! frontend.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{EntityId, ValidatedJson};
use crate::repositories::BlogRepository;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use portfolio_shared::types::{CreateBlogRequest, MessageResponse, UpdateBlogRequest};
use portfolio_shared::Blog;
use tracing::info;

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route(
            "/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

fn not_found() -> ApiError {
    ApiError::NotFound("Blog not found".to_string())
}

/// GET /api/blog
async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<Blog>>> {
    let records = BlogRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(Blog::from).collect()))
}

/// GET /api/blog/:id
async fn get_blog(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Blog>> {
    let record = BlogRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    Ok(Json(record.into()))
}

/// POST /api/blog
async fn create_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBlogRequest>,
) -> ApiResult<Json<Blog>> {
    let record = BlogRepository::create(state.db(), &req)
        .await
        .map_err(ApiError::Internal)?;

    info!(id = record.id, by = %auth.username, "Blog created");
    Ok(Json(record.into()))
}

/// PUT /api/blog/:id
async fn update_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateBlogRequest>,
) -> ApiResult<Json<Blog>> {
    let record = BlogRepository::update(state.db(), id, &req)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    info!(id, by = %auth.username, "Blog updated");
    Ok(Json(record.into()))
}

/// DELETE /api/blog/:id
async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = BlogRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(not_found());
    }

    info!(id, by = %auth.username, "Blog deleted");
    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}
