//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct MappingRow {
    short_key: String,
    destination_url: String,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.short_key, row.destination_url)
    }
}

/// PostgreSQL repository for mapping lookups.
///
/// Reads the `url_mappings` table: `short_key` is the primary key and
/// `destination_url` carries a unique index for the reverse lookup.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Counts stored mappings. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_key, destination_url
            FROM url_mappings
            WHERE short_key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_destination_url(
        &self,
        destination_url: &str,
    ) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_key, destination_url
            FROM url_mappings
            WHERE destination_url = $1
            LIMIT 1
            "#,
        )
        .bind(destination_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
