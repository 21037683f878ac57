//! Account-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to account lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountEvent {
    /// A new account was registered.
    SignedUp {
        /// The new user's ID.
        user_id: Uuid,
    },
    /// An account completed email confirmation.
    Confirmed {
        /// The confirmed user's ID.
        user_id: Uuid,
    },
    /// A session was opened for an account.
    SignedIn {
        /// The user ID.
        user_id: Uuid,
        /// The new session ID.
        session_id: Uuid,
    },
    /// A session was revoked.
    SignedOut {
        /// The user ID.
        user_id: Uuid,
        /// The revoked session ID.
        session_id: Uuid,
    },
}
