//! Authentication flows: login, refresh, change-password and "who am I"
//!
//! Rate limiting and body validation happen in the route layer, before any
//! of these run. Password hashing and comparison run on the blocking pool.

use crate::auth::{PasswordService, TokenPayload, TokenService};
use crate::error::ApiError;
use crate::repositories::CredentialStore;
use portfolio_shared::types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshResponse, SuccessResponse,
};
use portfolio_shared::validation::MIN_PASSWORD_LEN;
use portfolio_shared::PublicUser;
use tracing::{debug, info};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Auth service for credential and token operations
pub struct AuthService;

impl AuthService {
    /// Check credentials and issue an access/refresh token pair.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(
        store: &dyn CredentialStore,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let user = match store
            .find_by_username(&req.username)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(user) => user,
            None => {
                debug!(username = %req.username, "Login for unknown user");
                return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let valid = PasswordService::verify_async(req.password.clone(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            debug!(user_id = user.id, "Login with wrong password");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let payload = TokenPayload {
            user_id: user.id,
            username: user.username.clone(),
        };
        let access_token = tokens
            .issue_access_token(&payload)
            .map_err(ApiError::Internal)?;
        let refresh_token = tokens
            .issue_refresh_token(&payload)
            .map_err(ApiError::Internal)?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            success: true,
            access_token,
            refresh_token,
            user: user.into(),
        })
    }

    /// Issue a new access token from a refresh token.
    ///
    /// The account is not looked up again; a valid signature is enough.
    pub fn refresh(tokens: &TokenService, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        if refresh_token.is_empty() {
            return Err(ApiError::BadRequest("Refresh token required".to_string()));
        }

        let payload = tokens
            .verify_refresh(refresh_token)
            .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let access_token = tokens
            .issue_access_token(&payload)
            .map_err(ApiError::Internal)?;

        Ok(RefreshResponse {
            success: true,
            access_token,
        })
    }

    /// Replace a password after checking the old one
    pub async fn change_password(
        store: &dyn CredentialStore,
        req: &ChangePasswordRequest,
    ) -> Result<SuccessResponse, ApiError> {
        if req.username.is_empty() || req.old_password.is_empty() || req.new_password.is_empty() {
            return Err(ApiError::BadRequest("All fields required".to_string()));
        }

        if req.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user = store
            .find_by_username(&req.username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let valid =
            PasswordService::verify_async(req.old_password.clone(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid old password".to_string()));
        }

        let new_hash = PasswordService::hash_async(req.new_password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let updated = store
            .update_password(user.id, &new_hash)
            .await
            .map_err(ApiError::Internal)?;

        if !updated {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        info!(user_id = user.id, "Password changed");

        Ok(SuccessResponse {
            success: true,
            message: "Password changed successfully".to_string(),
        })
    }

    /// Current account for a verified token
    pub async fn me(store: &dyn CredentialStore, user_id: i32) -> Result<PublicUser, ApiError> {
        let user = store
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }
}
