//! Profile repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_shared::types::{CreateProfileRequest, UpdateProfileRequest};
use portfolio_shared::Profile;
use sqlx::PgPool;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
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

impl From<ProfileRecord> for Profile {
    fn from(r: ProfileRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            title: r.title,
            bio: r.bio,
            email: r.email,
            phone: r.phone,
            location: r.location,
            avatar: r.avatar,
            github: r.github,
            linkedin: r.linkedin,
            twitter: r.twitter,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const PROFILE_COLUMNS: &str = "id, name, title, bio, email, phone, location, avatar, github, \
                               linkedin, twitter, created_at, updated_at";

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// All profiles, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<ProfileRecord>> {
        let records = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id ASC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn create(pool: &PgPool, input: &CreateProfileRequest) -> Result<ProfileRecord> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            INSERT INTO profiles (name, title, bio, email, phone, location, avatar, github, linkedin, twitter)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.bio)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.location)
        .bind(&input.avatar)
        .bind(&input.github)
        .bind(&input.linkedin)
        .bind(&input.twitter)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Apply the fields present in `input`. `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &UpdateProfileRequest,
    ) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE profiles SET
                name = COALESCE($2, name),
                title = COALESCE($3, title),
                bio = COALESCE($4, bio),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                location = COALESCE($7, location),
                avatar = COALESCE($8, avatar),
                github = COALESCE($9, github),
                linkedin = COALESCE($10, linkedin),
                twitter = COALESCE($11, twitter),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.bio)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.location)
        .bind(&input.avatar)
        .bind(&input.github)
        .bind(&input.linkedin)
        .bind(&input.twitter)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
