//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Expensive resources (JWT keys, DB pool) are created once at startup and
//! every field is cheap to clone.

use crate::auth::{JwtSettings, LoginRateLimiter, TokenService};
use crate::config::AppConfig;
use crate::repositories::{CredentialStore, PgCredentialStore};
use crate::services::UploadService;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized token service with cached keys
    pub tokens: TokenService,
    /// Account lookup used by the auth flows
    pub credentials: Arc<dyn CredentialStore>,
    /// Login attempt limiter, shared across all requests
    pub rate_limiter: LoginRateLimiter,
    pub uploads: UploadService,
}

impl AppState {
    /// Create a new application state backed by PostgreSQL credentials
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let credentials = Arc::new(PgCredentialStore::new(db.clone()));
        Self::with_credential_store(db, config, credentials)
    }

    /// Create state with a specific credential store
    pub fn with_credential_store(
        db: PgPool,
        config: AppConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let tokens = TokenService::new(
            &config.jwt.secret,
            JwtSettings {
                access_token_expiry_secs: config.jwt.access_token_expiry_secs,
                refresh_token_expiry_secs: config.jwt.refresh_token_expiry_secs,
                strict_token_types: config.jwt.strict_token_types,
            },
        );

        let rate_limiter = LoginRateLimiter::new(
            config.rate_limit.max_attempts,
            Duration::from_secs(config.rate_limit.window_secs),
        );

        let uploads = UploadService::new(&config.uploads.dir, config.uploads.max_file_bytes);

        Self {
            db,
            config: Arc::new(config),
            tokens,
            credentials,
            rate_limiter,
            uploads,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    #[inline]
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }
}
