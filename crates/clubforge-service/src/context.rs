//! Session context carrying the authenticated user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Acquired at session start (token validation) and threaded explicitly
/// into every façade call so that each operation knows *who* is acting
/// and from *which* session. Invalidated by sign-out: the backing
/// session row is revoked and no further contexts are issued for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's email (convenience field from token claims).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl SessionContext {
    /// Creates a new session context.
    pub fn new(user_id: Uuid, session_id: Uuid, email: String) -> Self {
        Self {
            user_id,
            session_id,
            email,
            request_time: Utc::now(),
        }
    }
}
