//! Profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clubforge_core::error::{AppError, ErrorKind};
use clubforge_core::result::AppResult;
use clubforge_entity::profile::{Profile, UpdateProfile};

/// Repository for profile CRUD operations.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by its owning user id.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Insert the profile row for a freshly signed-up user.
    pub async fn create(&self, user_id: Uuid, display_name: Option<&str>) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, display_name) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }

    /// Update a profile's display fields, passing values through as given.
    pub async fn update(&self, user_id: Uuid, data: &UpdateProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET display_name = $2, \
                                 avatar_url = $3, \
                                 bio = $4, \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.display_name)
        .bind(&data.avatar_url)
        .bind(&data.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found(format!("Profile {user_id} not found")))
    }
}
