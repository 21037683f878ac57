//! Profile handlers for the current user.

use axum::Json;
use axum::extract::State;

use clubforge_core::types::lookup::Lookup;
use clubforge_entity::profile::UpdateProfile;

use crate::dto::request::{self, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, ProfilePageResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<ProfilePageResponse>>, ApiError> {
    let page = match state.profile_service.fetch(auth.context()).await? {
        Lookup::Found(profile) => ProfilePageResponse {
            found: true,
            profile: Some(profile.into()),
        },
        Lookup::NotFound => ProfilePageResponse {
            found: false,
            profile: None,
        },
    };

    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    request::validate(&req)?;

    let profile = state
        .profile_service
        .update(
            auth.context(),
            UpdateProfile {
                display_name: req.display_name,
                avatar_url: req.avatar_url,
                bio: req.bio,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile.into())))
}
