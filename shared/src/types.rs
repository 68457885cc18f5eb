//! API request and response types
//!
//! Request payloads reject unknown fields and carry their constraints as
//! `validator` derives. Required string fields default to empty so that a
//! missing field is reported alongside every other violation instead of
//! aborting deserialization on the first one.

use crate::models::PublicUser;
use crate::validation::optional_flexible_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Plain confirmation message, e.g. after a delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Refresh token request
///
/// Emptiness is checked by the refresh flow, which answers with its own
/// message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

/// New access token issued from a refresh token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub success: bool,
    pub access_token: String,
}

/// Change password request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

/// Generic success acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Result of a file upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
}

// ============================================================================
// Profile Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

// ============================================================================
// Portfolio Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePortfolioRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePortfolioRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Blog Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBlogRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

// ============================================================================
// Experience Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateExperienceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    pub description: Option<String>,
    #[serde(default, with = "optional_flexible_date")]
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_flexible_date")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "optional_flexible_date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_flexible_date")]
    pub end_date: Option<DateTime<Utc>>,
    pub current: Option<bool>,
}

/// Experience dates as stored, after the request has been validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperiencePeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl CreateExperienceRequest {
    /// Returns the validated period, or `None` when the start date is missing.
    pub fn period(&self) -> Option<ExperiencePeriod> {
        self.start_date.map(|start_date| ExperiencePeriod {
            start_date,
            end_date: self.end_date,
        })
    }
}

// ============================================================================
// Tech Stack Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTechStackRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub category: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTechStackRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blog_defaults_applied() {
        let req: CreateBlogRequest = serde_json::from_value(json!({ "title": "Hello" })).unwrap();
        assert!(!req.published);
        assert!(req.tags.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<CreatePortfolioRequest, _> =
            serde_json::from_value(json!({ "title": "x", "owner": "someone" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_type_coercion_rejected() {
        let result: Result<CreateBlogRequest, _> =
            serde_json::from_value(json!({ "title": "x", "published": "true" }));
        assert!(result.is_err());

        let result: Result<CreateTechStackRequest, _> =
            serde_json::from_value(json!({ "name": "Rust", "proficiency": "90" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_experience_accepts_plain_dates() {
        let req: CreateExperienceRequest = serde_json::from_value(json!({
            "company": "Acme",
            "position": "Engineer",
            "startDate": "2021-03-01",
            "endDate": null
        }))
        .unwrap();

        let period = req.period().unwrap();
        assert_eq!(period.start_date.to_rfc3339(), "2021-03-01T00:00:00+00:00");
        assert!(period.end_date.is_none());
        assert!(!req.current);
    }

    #[test]
    fn test_experience_missing_start_date_fails_validation() {
        let req: CreateExperienceRequest =
            serde_json::from_value(json!({ "company": "Acme", "position": "Engineer" })).unwrap();
        assert!(req.period().is_none());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_refresh_request_uses_camel_case() {
        let req: RefreshRequest =
            serde_json::from_value(json!({ "refreshToken": "abc" })).unwrap();
        assert_eq!(req.refresh_token, "abc");
    }

    #[test]
    fn test_login_response_shape() {
        let resp = LoginResponse {
            success: true,
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            user: PublicUser {
                id: 1,
                username: "admin".to_string(),
                email: "admin@portfolio.com".to_string(),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
        assert_eq!(json["user"]["username"], "admin");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            error: "Invalid credentials".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
