//! Tech stack repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_shared::types::{CreateTechStackRequest, UpdateTechStackRequest};
use portfolio_shared::TechStack;
use sqlx::PgPool;

/// Tech stack record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TechStackRecord {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub proficiency: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TechStackRecord> for TechStack {
    fn from(r: TechStackRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            category: r.category,
            icon: r.icon,
            proficiency: r.proficiency,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const TECH_STACK_COLUMNS: &str = "id, name, category, icon, proficiency, created_at, updated_at";

/// Tech stack repository for database operations
pub struct TechStackRepository;

impl TechStackRepository {
    /// All entries grouped by category, then alphabetical
    pub async fn list(pool: &PgPool) -> Result<Vec<TechStackRecord>> {
        let records = sqlx::query_as::<_, TechStackRecord>(&format!(
            "SELECT {TECH_STACK_COLUMNS} FROM tech_stacks ORDER BY category ASC NULLS LAST, name ASC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<TechStackRecord>> {
        let record = sqlx::query_as::<_, TechStackRecord>(&format!(
            "SELECT {TECH_STACK_COLUMNS} FROM tech_stacks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn create(pool: &PgPool, input: &CreateTechStackRequest) -> Result<TechStackRecord> {
        let record = sqlx::query_as::<_, TechStackRecord>(&format!(
            r#"
            INSERT INTO tech_stacks (name, category, icon, proficiency)
            VALUES ($1, $2, $3, $4)
            RETURNING {TECH_STACK_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.icon)
        .bind(input.proficiency)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &UpdateTechStackRequest,
    ) -> Result<Option<TechStackRecord>> {
        let record = sqlx::query_as::<_, TechStackRecord>(&format!(
            r#"
            UPDATE tech_stacks SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                icon = COALESCE($4, icon),
                proficiency = COALESCE($5, proficiency),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TECH_STACK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.icon)
        .bind(input.proficiency)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tech_stacks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
