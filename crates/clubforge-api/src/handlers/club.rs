//! Club directory and membership handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use clubforge_core::error::AppError;
use clubforge_core::types::lookup::Lookup;

use crate::dto::request::ClubListQuery;
use crate::dto::response::{
    ApiResponse, ClubPageResponse, ClubResponse, MembershipResponse, MembershipStatusResponse,
    MessageResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/clubs?q={term}
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubListQuery>,
) -> Result<Json<ApiResponse<Vec<ClubResponse>>>, ApiError> {
    let clubs = state.club_service.list(query.q.as_deref()).await?;

    Ok(Json(ApiResponse::ok(
        clubs.into_iter().map(ClubResponse::from).collect(),
    )))
}

/// GET /api/clubs/{slug}
///
/// An unknown slug is a 200 with `found: false`; the page exists, its
/// club does not.
pub async fn get_club(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ClubPageResponse>>, ApiError> {
    let page = match state.club_service.find_by_slug(&slug).await? {
        Lookup::Found(club) => {
            let member_count = state.club_service.member_count(club.id).await?;
            ClubPageResponse {
                found: true,
                club: Some(club.into()),
                member_count: Some(member_count),
            }
        }
        Lookup::NotFound => ClubPageResponse {
            found: false,
            club: None,
            member_count: None,
        },
    };

    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/clubs
///
/// Club creation is not offered; rows arrive via migrations or operator
/// tooling. The endpoint exists so callers get a stable 501 instead of a
/// routing 404.
pub async fn create_club(State(_state): State<AppState>) -> Result<(), ApiError> {
    Err(AppError::not_implemented("Club creation is not available").into())
}

/// GET /api/clubs/{id}/membership
pub async fn membership_status(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(club_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MembershipStatusResponse>>, ApiError> {
    let status = match state
        .membership_service
        .status(auth.context(), club_id)
        .await?
    {
        Lookup::Found(m) => MembershipStatusResponse {
            member: true,
            membership: Some(m.into()),
        },
        Lookup::NotFound => MembershipStatusResponse {
            member: false,
            membership: None,
        },
    };

    Ok(Json(ApiResponse::ok(status)))
}

/// POST /api/clubs/{id}/membership
pub async fn join_club(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(club_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MembershipResponse>>, ApiError> {
    let membership = state
        .membership_service
        .join(auth.context(), club_id)
        .await?;

    Ok(Json(ApiResponse::ok(membership.into())))
}

/// DELETE /api/memberships/{id}
pub async fn leave_club(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(membership_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .membership_service
        .leave(auth.context(), membership_id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Left club".to_string(),
    })))
}
