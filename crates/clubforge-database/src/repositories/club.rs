//! Club repository implementation.
//!
//! Clubs are read-only through the API; rows arrive via migrations or
//! operator tooling.

use sqlx::PgPool;
use uuid::Uuid;

use clubforge_core::error::{AppError, ErrorKind};
use clubforge_core::result::AppResult;
use clubforge_entity::club::Club;

/// Repository for club query operations.
#[derive(Debug, Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    /// Create a new club repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all clubs ordered by name.
    pub async fn find_all_ordered(&self) -> AppResult<Vec<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clubs", e))
    }

    /// Find a club by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find club by id", e))
    }

    /// Find a club by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find club by slug", e)
            })
    }
}
