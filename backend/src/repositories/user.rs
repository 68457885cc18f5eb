//! User repository and the credential store seen by the auth service

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portfolio_shared::PublicUser;
use sqlx::PgPool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for PublicUser {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Lookup and password replacement for user accounts
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive username match
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>>;

    /// Replace the stored hash. Returns `false` when no such user exists.
    async fn update_password(&self, id: i32, password_hash: &str) -> Result<bool>;
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, email, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn update_password(pool: &PgPool, id: i32, password_hash: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Create the user unless the username is already taken.
    /// Returns `true` when a row was inserted.
    pub async fn insert_if_missing(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check if a username exists
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        UserRepository::find_by_username(&self.pool, username).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>> {
        UserRepository::find_by_id(&self.pool, id).await
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<bool> {
        UserRepository::update_password(&self.pool, id, password_hash).await
    }
}

#[cfg(test)]
pub(crate) use memory::InMemoryCredentialStore;
