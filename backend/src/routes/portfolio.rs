//! Portfolio project routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{EntityId, ValidatedJson};
use crate::repositories::PortfolioRepository;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use portfolio_shared::types::{CreatePortfolioRequest, MessageResponse, UpdatePortfolioRequest};
use portfolio_shared::Portfolio;
use tracing::info;

/// Create portfolio routes
pub fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_portfolios).post(create_portfolio))
        .route(
            "/:id",
            get(get_portfolio).put(update_portfolio).delete(delete_portfolio),
        )
}

fn not_found() -> ApiError {
    ApiError::NotFound("Portfolio not found".to_string())
}

/// GET /api/portfolio
async fn list_portfolios(State(state): State<AppState>) -> ApiResult<Json<Vec<Portfolio>>> {
    let records = PortfolioRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(Portfolio::from).collect()))
}

/// GET /api/portfolio/:id
async fn get_portfolio(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Portfolio>> {
    let record = PortfolioRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    Ok(Json(record.into()))
}

/// POST /api/portfolio
async fn create_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePortfolioRequest>,
) -> ApiResult<Json<Portfolio>> {
    let record = PortfolioRepository::create(state.db(), &req)
        .await
        .map_err(ApiError::Internal)?;

    info!(id = record.id, by = %auth.username, "Portfolio created");
    Ok(Json(record.into()))
}

/// PUT /api/portfolio/:id
async fn update_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdatePortfolioRequest>,
) -> ApiResult<Json<Portfolio>> {
    let record = PortfolioRepository::update(state.db(), id, &req)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(not_found)?;

    info!(id, by = %auth.username, "Portfolio updated");
    Ok(Json(record.into()))
}

/// DELETE /api/portfolio/:id
async fn delete_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = PortfolioRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(not_found());
    }

    info!(id, by = %auth.username, "Portfolio deleted");
    Ok(Json(MessageResponse::new("Portfolio deleted successfully")))
}
