//! Integration tests for the content entity routes against PostgreSQL

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_blog_round_trip_applies_defaults() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, created) = app
        .request(
            Method::POST,
            "/api/blog",
            Some(&json!({ "title": "First post", "coverImage": "/uploads/cover.png" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["published"], false);
    assert_eq!(created["tags"], json!([]));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/blog/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["coverImage"], "/uploads/cover.png");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_portfolio_partial_update() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/api/portfolio",
            Some(&json!({ "title": "Site", "tags": ["rust", "axum"], "link": "https://x.dev" })),
            Some(&token),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = app
        .request(
            Method::PUT,
            &format!("/api/portfolio/{}", id),
            Some(&json!({ "description": "Rewritten" })),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Site");
    assert_eq!(updated["description"], "Rewritten");
    assert_eq!(updated["tags"], json!(["rust", "axum"]));
    assert_eq!(updated["link"], "https://x.dev");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_experience_accepts_plain_dates() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, created) = app
        .request(
            Method::POST,
            "/api/experience",
            Some(&json!({
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2021-03-01",
                "current": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["current"], true);
    assert!(created["endDate"].is_null());
    assert!(created["startDate"]
        .as_str()
        .unwrap()
        .starts_with("2021-03-01T00:00:00"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_experience_requires_start_date() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/experience",
            Some(&json!({ "company": "Acme", "position": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("position:")));
    assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("startDate:")));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_techstack_proficiency_bounds() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/api/techstack",
            Some(&json!({ "name": "Rust", "proficiency": 101 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = app
        .request(
            Method::POST,
            "/api/techstack",
            Some(&json!({ "name": "Rust", "category": "Languages", "proficiency": 90 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["proficiency"], 90);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_delete_then_404() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/api/profile",
            Some(&json!({ "name": "Jo", "email": "jo@example.com" })),
            Some(&token),
        )
        .await;
    let path = format!("/api/profile/{}", created["id"].as_i64().unwrap());

    let (status, body) = app.request(Method::DELETE, &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile deleted successfully");

    let (status, body) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Profile not found");

    let (status, _) = app.request(Method::DELETE, &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_rejects_invalid_email() {
    let app = common::TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/profile",
            Some(&json!({ "name": "Jo", "email": "not-an-email" })),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0], "email: Invalid email address");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_lists_are_public() {
    let app = common::TestApp::new().await;

    for path in [
        "/api/profile",
        "/api/portfolio",
        "/api/blog",
        "/api/experience",
        "/api/techstack",
    ] {
        let (status, body) = app.get(path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert!(body.is_array(), "{}", path);
    }
}
