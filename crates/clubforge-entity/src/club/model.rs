//! Club entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A community entity in the club directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Club {
    /// Unique club identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL slug, unique, used for routing.
    pub slug: String,
    /// Free-text description.
    pub description: String,
    /// Location string (campus or city).
    pub location: String,
    /// Ordered list of free-text tags.
    pub tags: Vec<String>,
    /// When the club was created.
    pub created_at: DateTime<Utc>,
    /// When the club was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Case-insensitive substring match over name, description, and tags.
    ///
    /// An empty term matches every club.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
