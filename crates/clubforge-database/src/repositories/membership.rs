//! Membership repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clubforge_core::error::{AppError, ErrorKind};
use clubforge_core::result::AppResult;
use clubforge_entity::membership::{CreateMembership, Membership};

/// Repository for membership CRUD operations.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a membership by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>("SELECT * FROM club_memberships WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find membership by id", e)
            })
    }

    /// Find the membership for a (club, user) pair, if any.
    pub async fn find_by_club_and_user(
        &self,
        club_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM club_memberships WHERE club_id = $1 AND user_id = $2",
        )
        .bind(club_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find membership by pair", e)
        })
    }

    /// Insert a membership row ("join").
    ///
    /// The unique (club_id, user_id) constraint is the arbiter of
    /// double-join races; a duplicate maps to `Conflict`.
    pub async fn create(&self, data: &CreateMembership) -> AppResult<Membership> {
        sqlx::query_as::<_, Membership>(
            "INSERT INTO club_memberships (club_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.club_id)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("club_memberships_club_id_user_id_key") =>
            {
                AppError::conflict("Already a member of this club")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("club_memberships_club_id_fkey") =>
            {
                AppError::not_found("Club not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create membership", e),
        })
    }

    /// Delete a membership by its identifier ("leave").
    ///
    /// Returns `true` when a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM club_memberships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete membership", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count memberships for a club.
    pub async fn count_by_club(&self, club_id: Uuid) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM club_memberships WHERE club_id = $1")
                .bind(club_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count memberships", e)
                })?;
        Ok(count as u64)
    }
}
