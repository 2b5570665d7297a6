//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository over the `urls` table.
///
/// Each query acquires a connection from the shared pool for its own
/// duration only; the connection goes back to the pool when the query
/// future completes or is dropped.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, AppError> {
        let record = sqlx::query_as::<_, ShortLinkRecord>(
            r#"
            INSERT INTO urls (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_long_url(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let long_url =
            sqlx::query_scalar::<_, String>("SELECT long_url FROM urls WHERE short_code = $1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url)
    }
}
