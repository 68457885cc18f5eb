//! Work experience repository
//!
//! The `current` flag is stored in the `is_current` column.

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_shared::types::{ExperiencePeriod, UpdateExperienceRequest};
use portfolio_shared::Experience;
use sqlx::PgPool;

/// Experience record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExperienceRecord {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ExperienceRecord> for Experience {
    fn from(r: ExperienceRecord) -> Self {
        Self {
            id: r.id,
            company: r.company,
            position: r.position,
            description: r.description,
            start_date: r.start_date,
            end_date: r.end_date,
            current: r.is_current,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Input for creating an experience entry
#[derive(Debug, Clone)]
pub struct CreateExperience {
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub period: ExperiencePeriod,
    pub current: bool,
}

const EXPERIENCE_COLUMNS: &str = "id, company, position, description, start_date, end_date, \
                                  is_current, created_at, updated_at";

/// Experience repository for database operations
pub struct ExperienceRepository;

impl ExperienceRepository {
    /// All entries, most recent start first
    pub async fn list(pool: &PgPool) -> Result<Vec<ExperienceRecord>> {
        let records = sqlx::query_as::<_, ExperienceRecord>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences ORDER BY start_date DESC, id DESC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ExperienceRecord>> {
        let record = sqlx::query_as::<_, ExperienceRecord>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn create(pool: &PgPool, input: CreateExperience) -> Result<ExperienceRecord> {
        let record = sqlx::query_as::<_, ExperienceRecord>(&format!(
            r#"
            INSERT INTO experiences (company, position, description, start_date, end_date, is_current)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(&input.company)
        .bind(&input.position)
        .bind(&input.description)
        .bind(input.period.start_date)
        .bind(input.period.end_date)
        .bind(input.current)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &UpdateExperienceRequest,
    ) -> Result<Option<ExperienceRecord>> {
        let record = sqlx::query_as::<_, ExperienceRecord>(&format!(
            r#"
            UPDATE experiences SET
                company = COALESCE($2, company),
                position = COALESCE($3, position),
                description = COALESCE($4, description),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                is_current = COALESCE($7, is_current),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.company)
        .bind(&input.position)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.current)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
