//! `AuthSession` extractor: pulls the JWT from the Authorization header,
//! validates it and the backing session row, and injects a [`SessionContext`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clubforge_core::error::AppError;
use clubforge_service::context::SessionContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated session context available in handlers.
///
/// Rejection happens before the handler runs: a missing header, a bad
/// token, or a revoked/expired session never reaches business logic.
#[derive(Debug, Clone)]
pub struct AuthSession(pub SessionContext);

impl AuthSession {
    /// Returns the inner [`SessionContext`].
    pub fn context(&self) -> &SessionContext {
        &self.0
    }
}

impl std::ops::Deref for AuthSession {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        // A valid signature is not enough; the session row must still be live.
        state
            .session_manager
            .validate_session(claims.session_id())
            .await?;

        Ok(AuthSession(SessionContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.email.clone(),
        )))
    }
}
