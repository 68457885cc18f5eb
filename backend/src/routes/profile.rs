//! Profile routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{EntityId, ValidatedJson};
use crate::repositories::ProfileRepository;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use portfolio_shared::types::{CreateProfileRequest, MessageResponse, UpdateProfileRequest};
use portfolio_shared::Profile;
use tracing::info;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

fn not_found() -> ApiError {
    ApiError::NotFound("Profile not found".to_string())
}

/// GET /api/profile
async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<Vec<Profile>>> {
    let records = ProfileRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(Profile::from).collect()))
}

/// GET /api/profile/:id
async fn get_profile(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Profile>> {
    let record = ProfileRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    Ok(Json(record.into()))
}

/// POST /api/profile
async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateProfileRequest>,
) -> ApiResult<Json<Profile>> {
    let record = ProfileRepository::create(state.db(), &req)
        .await
        .map_err(ApiError::Internal)?;

    info!(id = record.id, by = %auth.username, "Profile created");
    Ok(Json(record.into()))
}

/// PUT /api/profile/:id
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<Profile>> {
    let record = ProfileRepository::update(state.db(), id, &req)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    info!(id, by = %auth.username, "Profile updated");
    Ok(Json(record.into()))
}

/// DELETE /api/profile/:id
async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = ProfileRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(not_found());
    }

    info!(id, by = %auth.username, "Profile deleted");
    Ok(Json(MessageResponse::new("Profile deleted successfully")))
}
