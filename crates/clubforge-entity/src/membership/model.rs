//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A join record linking a user to a club.
///
/// At most one membership row exists per (club, user) pair; the store
/// enforces this with a unique constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The club joined.
    pub club_id: Uuid,
    /// The joining user.
    pub user_id: Uuid,
    /// When the user joined.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a membership ("join").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembership {
    /// The club to join.
    pub club_id: Uuid,
    /// The joining user.
    pub user_id: Uuid,
}
