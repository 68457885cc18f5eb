//! Tech stack routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{EntityId, ValidatedJson};
use crate::repositories::TechStackRepository;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use portfolio_shared::types::{CreateTechStackRequest, MessageResponse, UpdateTechStackRequest};
use portfolio_shared::TechStack;
use tracing::info;

/// Create tech stack routes
pub fn techstack_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tech_stacks).post(create_tech_stack))
        .route(
            "/:id",
            get(get_tech_stack).put(update_tech_stack).delete(delete_tech_stack),
        )
}

fn not_found() -> ApiError {
    ApiError::NotFound("Tech stack not found".to_string())
}

/// GET /api/techstack
async fn list_tech_stacks(State(state): State<AppState>) -> ApiResult<Json<Vec<TechStack>>> {
    let records = TechStackRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(TechStack::from).collect()))
}

/// GET /api/techstack/:id
async fn get_tech_stack(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<TechStack>> {
    let record = TechStackRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    Ok(Json(record.into()))
}

/// POST /api/techstack
async fn create_tech_stack(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateTechStackRequest>,
) -> ApiResult<Json<TechStack>> {
    let record = TechStackRepository::create(state.db(), &req)
        .await
        .map_err(ApiError::Internal)?;

    info!(id = record.id, by = %auth.username, "Tech stack created");
    Ok(Json(record.into()))
}

/// PUT /api/techstack/:id
async fn update_tech_stack(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateTechStackRequest>,
) -> ApiResult<Json<TechStack>> {
    let record = TechStackRepository::update(state.db(), id, &req)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    info!(id, by = %auth.username, "Tech stack updated");
    Ok(Json(record.into()))
}

/// DELETE /api/techstack/:id
async fn delete_tech_stack(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = TechStackRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(not_found());
    }

    info!(id, by = %auth.username, "Tech stack deleted");
    Ok(Json(MessageResponse::new("Tech stack deleted successfully")))
}
