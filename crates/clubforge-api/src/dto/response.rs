//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubforge_entity::club::Club;
use clubforge_entity::membership::Membership;
use clubforge_entity::profile::Profile;
use clubforge_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Club summary for directory listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubResponse {
    /// Club ID.
    pub id: Uuid,
    /// Club name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            slug: club.slug,
            description: club.description,
            location: club.location,
            tags: club.tags,
            created_at: club.created_at,
        }
    }
}

/// Club page response: absence is ordinary, renderable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubPageResponse {
    /// Whether the slug resolved to a club.
    pub found: bool,
    /// The club, when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<ClubResponse>,
    /// Member count, when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
}

/// Membership summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    /// Membership ID (the handle used to leave).
    pub id: Uuid,
    /// Club ID.
    pub club_id: Uuid,
    /// User ID.
    pub user_id: Uuid,
    /// When the user joined.
    pub created_at: DateTime<Utc>,
}

impl From<Membership> for MembershipResponse {
    fn from(m: Membership) -> Self {
        Self {
            id: m.id,
            club_id: m.club_id,
            user_id: m.user_id,
            created_at: m.created_at,
        }
    }
}

/// Membership status for the current user in a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipStatusResponse {
    /// Whether the current user is a member.
    pub member: bool,
    /// The membership row, when a member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<MembershipResponse>,
}

/// User summary for responses. Never carries credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Whether the email is confirmed.
    pub confirmed: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            confirmed: user.is_confirmed(),
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Sign-up response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// The created user.
    pub user: UserResponse,
    /// Whether email confirmation is pending before sign-in works.
    pub confirmation_required: bool,
}

/// Sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Confirmation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    /// The confirmed user's ID.
    pub user_id: Uuid,
    /// Where the user asked to land after confirming.
    pub redirect_to: String,
}

/// Profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The owning user's ID.
    pub id: Uuid,
    /// Display name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Bio.
    pub bio: Option<String>,
    /// Last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            display_name: p.display_name,
            avatar_url: p.avatar_url,
            bio: p.bio,
            updated_at: p.updated_at,
        }
    }
}

/// Profile page response: a missing row renders as empty state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePageResponse {
    /// Whether a profile row exists.
    pub found: bool,
    /// The profile, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database reachability.
    pub database: String,
}
