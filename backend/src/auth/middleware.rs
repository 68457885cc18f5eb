//! Bearer token extraction
//!
//! Protected handlers take an [`AuthUser`] argument. The extractor verifies
//! the token with the pre-computed keys in `AppState` and never touches the
//! database.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Token from an `Authorization` header value.
///
/// A leading `"Bearer "` is stripped when present; any other value is taken
/// as the raw token. Absent or empty values yield `None`.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let value = header?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Identity of a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = extract_bearer(header)
            .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

        let payload = app_state
            .tokens()
            .verify_access(token)
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: payload.user_id,
            username: payload.username,
        })
    }
}
