//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session record backing an issued access token.
///
/// Sign-out revokes the row; token validation checks the row is neither
/// revoked nor expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (also carried in the JWT `sid` claim).
    pub id: Uuid,
    /// The session owner.
    pub user_id: Uuid,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked (`None` = still live).
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check whether this session is still valid at the given instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    /// Check whether this session is still valid right now.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}
