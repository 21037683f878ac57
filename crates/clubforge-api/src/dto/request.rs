//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use clubforge_core::error::AppError;

/// Runs derive-based validation, mapping failures to a domain error.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password (policy enforced server-side as well).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Initial display name for the profile.
    pub display_name: Option<String>,
    /// Where to land after email confirmation.
    pub redirect_to: Option<String>,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Confirmation query parameters (`GET /api/auth/confirm?token=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmQuery {
    /// The single-use confirmation token from the sign-up email.
    pub token: Uuid,
}

/// Club listing query parameters (`GET /api/clubs?q=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClubListQuery {
    /// Search term matched against name, description, and tags.
    pub q: Option<String>,
}

/// Profile update request body. Fields pass through as given;
/// omitting a field clears it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Display name.
    #[validate(length(max = 120, message = "Display name is too long"))]
    pub display_name: Option<String>,
    /// Avatar URL.
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
    /// Free-text bio.
    #[validate(length(max = 2000, message = "Bio is too long"))]
    pub bio: Option<String>,
}

/// WebSocket authentication query (`GET /ws?token=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: String,
}
