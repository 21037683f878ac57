//! Membership-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to club membership changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MembershipEvent {
    /// A user joined a club.
    Joined {
        /// The membership row ID.
        membership_id: Uuid,
        /// The club that was joined.
        club_id: Uuid,
        /// The joining user.
        user_id: Uuid,
    },
    /// A user left a club.
    Left {
        /// The membership row ID that was deleted.
        membership_id: Uuid,
        /// The club that was left.
        club_id: Uuid,
        /// The leaving user.
        user_id: Uuid,
    },
}
