//! PostgreSQL implementation of url repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for url record storage and retrieval.
///
/// Uniqueness of `original_url` and `short_url` is enforced by the
/// `urls_original_url_key` and `urls_short_url_key` constraints; violations
/// surface as [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_url: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.original_url, r.short_url, r.created_at)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_max_short_url(&self) -> Result<Option<i64>, AppError> {
        let max = sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(short_url) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(max)
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(&new_record.original_url)
        .bind(new_record.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            ORDER BY short_url
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update_original_url(
        &self,
        short_url: i64,
        original_url: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET original_url = $2 WHERE short_url = $1")
            .bind(short_url)
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
