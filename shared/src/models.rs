//! Data models for the portfolio site
//!
//! These are the JSON shapes returned by the API. Field names are camelCase
//! on the wire to match the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public identity of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Owner profile shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Work experience entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Technology shown in the skills section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub proficiency: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_serializes_camel_case() {
        let now = Utc::now();
        let blog = Blog {
            id: 1,
            title: "Hello".to_string(),
            slug: None,
            excerpt: None,
            content: None,
            image: None,
            cover_image: Some("/uploads/a.png".to_string()),
            tags: vec![],
            published: false,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["coverImage"], "/uploads/a.png");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("cover_image").is_none());
    }

    #[test]
    fn test_public_user_has_no_hash_field() {
        let user = PublicUser {
            id: 1,
            username: "admin".to_string(),
            email: "admin@portfolio.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(!json.to_string().contains("password"));
    }
}
