//! Profile-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProfileEvent {
    /// A profile was updated.
    Updated {
        /// The profile owner's user ID.
        user_id: Uuid,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },
}
