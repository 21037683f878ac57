//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered auth identity.
///
/// Display metadata lives on the [`Profile`](crate::Profile) row keyed by
/// the same id; this row carries only credentials and confirmation state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, unique, used for sign-in.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the email was confirmed (`None` = still pending).
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Outstanding confirmation token (`None` once redeemed).
    #[serde(skip_serializing)]
    pub confirmation_token: Option<Uuid>,
    /// Redirect target to report after confirmation.
    pub confirm_redirect_to: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the account has completed email confirmation.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Confirmation token (`None` when confirmation is not required).
    pub confirmation_token: Option<Uuid>,
    /// Post-confirmation redirect target.
    pub confirm_redirect_to: Option<String>,
    /// Confirmation timestamp to set immediately (auto-confirm mode).
    pub confirmed_at: Option<DateTime<Utc>>,
}
