//! Work experience routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{EntityId, ValidatedJson};
use crate::repositories::{CreateExperience, ExperienceRepository};
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use portfolio_shared::types::{CreateExperienceRequest, MessageResponse, UpdateExperienceRequest};
use portfolio_shared::Experience;
use tracing::info;

/// Create experience routes
pub fn experience_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_experiences).post(create_experience))
        .route(
            "/:id",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
}

fn not_found() -> ApiError {
    ApiError::NotFound("Experience not found".to_string())
}

/// GET /api/experience
async fn list_experiences(State(state): State<AppState>) -> ApiResult<Json<Vec<Experience>>> {
    let records = ExperienceRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(Experience::from).collect()))
}

/// GET /api/experience/:id
async fn get_experience(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Experience>> {
    let record = ExperienceRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    Ok(Json(record.into()))
}

/// POST /api/experience
async fn create_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateExperienceRequest>,
) -> ApiResult<Json<Experience>> {
    // Validation guarantees a start date
    let period = req
        .period()
        .ok_or_else(|| ApiError::Validation(vec!["startDate: Start date is required".to_string()]))?;

    let input = CreateExperience {
        company: req.company,
        position: req.position,
        description: req.description,
        period,
        current: req.current,
    };

    let record = ExperienceRepository::create(state.db(), input)
        .await
        .map_err(ApiError::Internal)?;

    info!(id = record.id, by = %auth.username, "Experience created");
    Ok(Json(record.into()))
}

/// PUT /api/experience/:id
async fn update_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateExperienceRequest>,
) -> ApiResult<Json<Experience>> {
    let record = ExperienceRepository::update(state.db(), id, &req)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    info!(id, by = %auth.username, "Experience updated");
    Ok(Json(record.into()))
}

/// DELETE /api/experience/:id
async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    if !ExperienceRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
    {
        return Err(not_found());
    }

    info!(id, by = %auth.username, "Experience deleted");
    Ok(Json(MessageResponse::new("Experience deleted successfully")))
}
