//! Health check endpoints
//!
//! - `/health` reports the process is up
//! - `/health/live` liveness probe
//! - `/health/ready` readiness probe, 503 while the database is unreachable

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

/// Reported to clients in place of the driver error, which stays in the logs
const DATABASE_UNAVAILABLE: &str = "database unavailable";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}

pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match db::health_check(state.db()).await {
        Ok(()) => (
            "ready",
            StatusCode::OK,
            DatabaseStatus {
                reachable: true,
                error: None,
            },
        ),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (
                "not_ready",
                StatusCode::SERVICE_UNAVAILABLE,
                DatabaseStatus {
                    reachable: false,
                    error: Some(DATABASE_UNAVAILABLE),
                },
            )
        }
    };

    let mut response = HealthResponse::new(status);
    response.database = Some(database);
    (code, Json(response))
}
