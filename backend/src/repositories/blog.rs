//! Blog post repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use portfolio_shared::types::{CreateBlogRequest, UpdateBlogRequest};
use portfolio_shared::Blog;
use sqlx::PgPool;

/// Blog record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRecord {
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

impl From<BlogRecord> for Blog {
    fn from(r: BlogRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            slug: r.slug,
            excerpt: r.excerpt,
            content: r.content,
            image: r.image,
            cover_image: r.cover_image,
            tags: r.tags,
            published: r.published,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, image, cover_image, tags, \
                            published, created_at, updated_at";

/// Blog repository for database operations
pub struct BlogRepository;

impl BlogRepository {
    /// All posts, drafts included, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogRecord>> {
        let records = sqlx::query_as::<_, BlogRecord>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn create(pool: &PgPool, input: &CreateBlogRequest) -> Result<BlogRecord> {
        let record = sqlx::query_as::<_, BlogRecord>(&format!(
            r#"
            INSERT INTO blogs (title, slug, excerpt, content, image, cover_image, tags, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.image)
        .bind(&input.cover_image)
        .bind(&input.tags)
        .bind(input.published)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &UpdateBlogRequest,
    ) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(&format!(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                image = COALESCE($6, image),
                cover_image = COALESCE($7, cover_image),
                tags = COALESCE($8, tags),
                published = COALESCE($9, published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.image)
        .bind(&input.cover_image)
        .bind(&input.tags)
        .bind(input.published)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
