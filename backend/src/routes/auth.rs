//! Authentication routes
//!
//! Login and change-password share one rate limit per client IP. The limit
//! is checked after the body has been validated and before any account
//! lookup.

use crate::auth::{client_key, AuthUser, RateLimitDecision};
use crate::error::{ApiError, ApiResult};
use crate::extractors::ValidatedJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, State},
    routing::{get, post},
    Json, Router,
};
use portfolio_shared::types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse,
    SuccessResponse,
};
use portfolio_shared::PublicUser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/change-password", post(change_password))
        .route("/me", get(me))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    enforce_rate_limit(&state, peer)?;

    let response = AuthService::login(state.credentials(), state.tokens(), &req).await?;
    Ok(Json(response))
}

/// POST /api/auth/refresh
async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    let response = AuthService::refresh(state.tokens(), &req.refresh_token)?;
    Ok(Json(response))
}

/// POST /api/auth/change-password
async fn change_password(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    enforce_rate_limit(&state, peer)?;

    let response = AuthService::change_password(state.credentials(), &req).await?;
    Ok(Json(response))
}

/// GET /api/auth/me
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<PublicUser>> {
    let user = AuthService::me(state.credentials(), auth.user_id).await?;
    Ok(Json(user))
}

/// Count one credential check against the caller's budget
fn enforce_rate_limit(state: &AppState, peer: Option<ConnectInfo<SocketAddr>>) -> ApiResult<()> {
    let key = client_key(peer.map(|ConnectInfo(addr)| addr));

    match state.rate_limiter.attempt(&key) {
        RateLimitDecision::Allowed { .. } => Ok(()),
        RateLimitDecision::Limited { retry_after } => {
            warn!(client = %key, "Auth rate limit exceeded");
            Err(ApiError::RateLimited {
                retry_after_secs: retry_after_secs(retry_after),
            })
        }
    }
}

/// Whole seconds for `Retry-After`, rounded up and never zero
fn retry_after_secs(wait: Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(Duration::from_millis(1500)), 2);
        assert_eq!(retry_after_secs(Duration::from_secs(900)), 900);
        assert_eq!(retry_after_secs(Duration::ZERO), 1);
    }
}
