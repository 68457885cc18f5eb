//! Database connection and pool management
//!
//! Pool settings, migrations, the startup admin seed and the readiness
//! probe query.

use crate::auth::PasswordService;
use crate::config::AdminConfig;
use crate::repositories::UserRepository;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Database configuration for pool creation
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,  // 10 minutes
            max_lifetime_secs: 1800, // 30 minutes
        }
    }
}

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let config = DbConfig {
        url: database_url.to_string(),
        max_connections,
        ..Default::default()
    };
    create_pool_with_config(&config).await
}

/// Create a PostgreSQL connection pool with custom configuration
pub async fn create_pool_with_config(config: &DbConfig) -> Result<PgPool> {
    let connect_options =
        PgConnectOptions::from_str(&config.url)?.application_name("portfolio-backend");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        "Database pool created: max={}, min={}",
        config.max_connections, config.min_connections
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Insert the configured admin account when it does not exist yet.
///
/// Does nothing without a configured password. An existing account keeps
/// its current password.
pub async fn seed_admin(pool: &PgPool, admin: &AdminConfig) -> Result<()> {
    let Some(password) = admin.password.as_deref() else {
        info!("No admin password configured, skipping admin seed");
        return Ok(());
    };

    if UserRepository::username_exists(pool, &admin.username).await? {
        info!(username = %admin.username, "Admin account already present");
        return Ok(());
    }

    let hash = PasswordService::hash_async(password.to_string()).await?;
    if UserRepository::insert_if_missing(pool, &admin.username, &admin.email, &hash).await? {
        info!(username = %admin.username, "Admin account created");
    }

    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
