//! Portfolio Backend
//!
//! REST API for a personal portfolio site: profile, projects, blog,
//! experience and tech stack, with bearer-token authentication and uploads.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: auth flows and upload storage
//! - Repositories: PostgreSQL access with SQLx

use anyhow::Result;
use portfolio_backend::{config, db, routes, state::AppState};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;
    let production = config::AppConfig::is_production();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if production { "production" } else { "development" },
        "Starting portfolio backend"
    );

    if production {
        validate_production_config(&config)?;
    }

    info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database.url, config.database.max_connections).await?;

    // Production deployments run migrations as a separate step
    if !production {
        db::run_migrations(&db_pool).await?;
    }

    db::seed_admin(&db_pool, &config.admin).await?;

    let state = AppState::new(db_pool, config.clone());
    state.uploads.ensure_dir().await?;

    spawn_rate_limit_purge(&state);

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Peer addresses feed the login rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "portfolio_backend=info,tower_http=info".into()
        } else {
            "portfolio_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Refuse to start production with placeholder settings
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let errors = config.production_errors();

    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Drop expired rate-limit buckets once per window
fn spawn_rate_limit_purge(state: &AppState) {
    let limiter = state.rate_limiter.clone();
    let period = limiter.window().max(Duration::from_secs(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            limiter.purge_expired();
        }
    });
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
