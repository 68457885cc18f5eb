//! Route definitions for the portfolio API
//!
//! This module organizes all API routes and applies middleware.

use crate::config::{AppConfig, DEV_FRONTEND_ORIGIN};
use crate::services::UPLOADS_URL_PREFIX;
use crate::state::AppState;
use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::debug;

mod auth;
mod blog;
mod experience;
mod health;
mod portfolio;
mod profile;
mod techstack;
mod upload;

#[cfg(test)]
mod auth_tests;

pub use auth::auth_routes;
pub use blog::blog_routes;
pub use experience::experience_routes;
pub use portfolio::portfolio_routes;
pub use profile::profile_routes;
pub use techstack::techstack_routes;
pub use upload::upload_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let allowed_origins = cors_allow_list(&state.config, AppConfig::is_production());
    let uploads_dir = state.uploads.dir().to_path_buf();
    let max_upload_bytes = state.uploads.max_bytes();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes(max_upload_bytes))
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(uploads_dir))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer(allowed_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let header_str = |name: header::HeaderName| {
                request
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-")
                    .to_owned()
            };
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                origin = %header_str(header::ORIGIN),
                request_id = %header_str(header::HeaderName::from_static("x-request-id")),
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// API routes under /api
fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/profile", profile_routes())
        .nest("/portfolio", portfolio_routes())
        .nest("/blog", blog_routes())
        .nest("/experience", experience_routes())
        .nest("/techstack", techstack_routes())
        .nest("/upload", upload_routes(max_upload_bytes))
}

/// Origins allowed to call the API. Outside production the local frontend
/// dev server is always included.
pub fn cors_allow_list(config: &AppConfig, production: bool) -> Vec<String> {
    let mut origins = config.cors.allowed_origins();
    if !production && !origins.iter().any(|o| o == DEV_FRONTEND_ORIGIN) {
        origins.push(DEV_FRONTEND_ORIGIN.to_string());
    }
    origins
}

/// Exact match against the allow-list
pub fn origin_allowed(origin: &HeaderValue, allowed: &[String]) -> bool {
    origin
        .to_str()
        .map(|o| allowed.iter().any(|a| a == o))
        .unwrap_or(false)
}

fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let allowed = Arc::new(allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            let ok = origin_allowed(origin, &allowed);
            if !ok {
                debug!(origin = ?origin, "CORS origin rejected");
            }
            ok
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_origin_added_outside_production() {
        let mut config = AppConfig::default();
        config.cors.origin = "https://me.dev".to_string();

        let dev = cors_allow_list(&config, false);
        assert_eq!(dev, vec!["https://me.dev", DEV_FRONTEND_ORIGIN]);

        let prod = cors_allow_list(&config, true);
        assert_eq!(prod, vec!["https://me.dev"]);
    }

    #[test]
    fn test_origin_match_is_exact() {
        let allowed = vec!["https://me.dev".to_string()];

        assert!(origin_allowed(&HeaderValue::from_static("https://me.dev"), &allowed));
        assert!(!origin_allowed(&HeaderValue::from_static("https://me.dev.evil.com"), &allowed));
        assert!(!origin_allowed(&HeaderValue::from_static("http://me.dev"), &allowed));
    }
}
