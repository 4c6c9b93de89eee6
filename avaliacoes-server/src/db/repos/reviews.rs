//! Review repository
//!
//! Every call acquires one connection from the pool, runs one statement on
//! it and returns the connection to the pool when it is dropped.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{NewReview, Pagination};

/// Review record from database
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: i64,
    pub nome: String,
    pub mensagem: String,
    pub data: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews, newest first.
    ///
    /// The casts let `serial`/`timestamp` columns decode the same as
    /// `bigserial`/`timestamptz`.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Review>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT
                id::bigint AS id,
                nome,
                mensagem,
                data::timestamptz AS data
            FROM avaliacoes
            ORDER BY data DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(
            page = page.page,
            limit = page.limit,
            returned = reviews.len(),
            "listed reviews"
        );

        Ok(reviews)
    }

    /// Insert a review. Id and `data` come from column defaults.
    pub async fn create(&self, review: &NewReview) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("INSERT INTO avaliacoes (nome, mensagem) VALUES ($1, $2)")
            .bind(review.name.as_str())
            .bind(review.message.as_str())
            .execute(&mut *conn)
            .await?;

        tracing::debug!(nome = %review.name.as_str(), "review inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
    use std::time::Duration;

    fn unreachable_pool() -> PgPool {
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .ssl_mode(PgSslMode::Disable);
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy_with(options)
    }

    #[tokio::test]
    async fn list_surfaces_connection_failure() {
        let pool = unreachable_pool();
        let result = ReviewRepo::new(&pool).list(Pagination::default()).await;
        assert!(matches!(result, Err(DbError::Sqlx(_))));
    }

    #[tokio::test]
    async fn create_surfaces_connection_failure() {
        let pool = unreachable_pool();
        let review = NewReview::from_fields(Some("Ana"), Some("Ótimo serviço")).unwrap();
        let result = ReviewRepo::new(&pool).create(&review).await;
        assert!(matches!(result, Err(DbError::Sqlx(_))));
    }
}
