//! Domain events emitted by ClubForge operations.
//!
//! Events are fanned out through the change feed so connected clients
//! know when to re-derive their view of a club, membership, or profile.

pub mod account;
pub mod membership;
pub mod profile;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use account::AccountEvent;
pub use membership::MembershipEvent;
pub use profile::ProfileEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A membership-related event.
    Membership(MembershipEvent),
    /// A profile-related event.
    Profile(ProfileEvent),
    /// An account-related event.
    Account(AccountEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}
