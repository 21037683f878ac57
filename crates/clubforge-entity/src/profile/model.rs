//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user display metadata, separate from auth credentials.
///
/// Keyed by user id (1:1 with an auth identity); the row is created at
/// sign-up and mutated only by the profile-editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// The owning user's ID.
    pub id: Uuid,
    /// Display name shown to others.
    pub display_name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Free-text bio.
    pub bio: Option<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for updating a profile; fields pass through as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// New bio.
    pub bio: Option<String>,
}
