//! Auth handlers: sign-up, sign-in, sign-out, confirm, me.

use axum::Json;
use axum::extract::{Query, State};

use clubforge_core::error::AppError;
use clubforge_core::events::{AccountEvent, DomainEvent, EventPayload};
use clubforge_service::account::SignUpRequest as ServiceSignUp;

use crate::dto::request::{self, ConfirmQuery, SignInRequest, SignUpRequest};
use crate::dto::response::{
    ApiResponse, ConfirmResponse, MessageResponse, SignInResponse, SignUpResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<ApiResponse<SignUpResponse>>, ApiError> {
    request::validate(&req)?;

    let result = state
        .account_service
        .sign_up(ServiceSignUp {
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            redirect_to: req.redirect_to,
        })
        .await?;

    Ok(Json(ApiResponse::ok(SignUpResponse {
        user: result.user.into(),
        confirmation_required: result.confirmation_required,
    })))
}

/// POST /api/auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<SignInResponse>>, ApiError> {
    request::validate(&req)?;

    let result = state.session_manager.sign_in(&req.email, &req.password).await?;

    state.feed.publish(DomainEvent::new(
        Some(result.user.id),
        EventPayload::Account(AccountEvent::SignedIn {
            user_id: result.user.id,
            session_id: result.session.id,
        }),
    ));

    Ok(Json(ApiResponse::ok(SignInResponse {
        access_token: result.access_token,
        expires_at: result.expires_at,
        user: result.user.into(),
    })))
}

/// POST /api/auth/signout
pub async fn signout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.sign_out(auth.session_id).await?;

    state.feed.publish(DomainEvent::new(
        Some(auth.user_id),
        EventPayload::Account(AccountEvent::SignedOut {
            user_id: auth.user_id,
            session_id: auth.session_id,
        }),
    ));

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Signed out".to_string(),
    })))
}

/// GET /api/auth/confirm?token={uuid}
pub async fn confirm(
    State(state): State<AppState>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<ConfirmResponse>>, ApiError> {
    let result = state.account_service.confirm(query.token).await?;

    Ok(Json(ApiResponse::ok(ConfirmResponse {
        user_id: result.user_id,
        redirect_to: result.redirect_to,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(user.into())))
}
