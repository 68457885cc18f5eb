//! Portfolio project repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_shared::types::{CreatePortfolioRequest, UpdatePortfolioRequest};
use portfolio_shared::Portfolio;
use sqlx::PgPool;

/// Portfolio record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortfolioRecord {
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

impl From<PortfolioRecord> for Portfolio {
    fn from(r: PortfolioRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            image: r.image,
            link: r.link,
            github: r.github,
            tags: r.tags,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const PORTFOLIO_COLUMNS: &str =
    "id, title, description, image, link, github, tags, created_at, updated_at";

/// Portfolio repository for database operations
pub struct PortfolioRepository;

impl PortfolioRepository {
    /// All projects, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioRecord>> {
        let records = sqlx::query_as::<_, PortfolioRecord>(&format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolios ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<PortfolioRecord>> {
        let record = sqlx::query_as::<_, PortfolioRecord>(&format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolios WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn create(pool: &PgPool, input: &CreatePortfolioRequest) -> Result<PortfolioRecord> {
        let record = sqlx::query_as::<_, PortfolioRecord>(&format!(
            r#"
            INSERT INTO portfolios (title, description, image, link, github, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PORTFOLIO_COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.link)
        .bind(&input.github)
        .bind(&input.tags)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &UpdatePortfolioRequest,
    ) -> Result<Option<PortfolioRecord>> {
        let record = sqlx::query_as::<_, PortfolioRecord>(&format!(
            r#"
            UPDATE portfolios SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                link = COALESCE($5, link),
                github = COALESCE($6, github),
                tags = COALESCE($7, tags),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PORTFOLIO_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.link)
        .bind(&input.github)
        .bind(&input.tags)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
