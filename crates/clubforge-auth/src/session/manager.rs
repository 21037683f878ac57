//! Session lifecycle: sign-in, sign-out, and validation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use clubforge_core::config::auth::AuthConfig;
use clubforge_core::error::AppError;
use clubforge_database::repositories::session::SessionRepository;
use clubforge_database::repositories::user::UserRepository;
use clubforge_entity::session::Session;
use clubforge_entity::user::User;

use crate::jwt::encoder::JwtEncoder;
use crate::password::hasher::PasswordHasher;

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignInResult {
    /// The authenticated user.
    pub user: User,
    /// The session row backing the issued token.
    pub session: Session,
    /// Signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Manages the session lifecycle against the sessions table.
///
/// Sign-in verifies credentials and opens a session row; sign-out revokes
/// it; validation rejects tokens whose backing session is revoked or
/// expired.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// User repository for credential lookups.
    user_repo: Arc<UserRepository>,
    /// Session repository for row lifecycle.
    session_repo: Arc<SessionRepository>,
    /// Password hasher for verification.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Server-side session lifetime in hours.
    session_ttl_hours: i64,
    /// Whether unconfirmed accounts may sign in.
    require_confirmation: bool,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            encoder,
            session_ttl_hours: config.session_ttl_hours as i64,
            require_confirmation: config.require_confirmation,
        }
    }

    /// Signs a user in with email and password.
    ///
    /// A missing user and a wrong password produce the same error so the
    /// response does not reveal which emails are registered.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self
            .hasher
            .verify_password(password, &user.password_hash)?
        {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if self.require_confirmation && !user.is_confirmed() {
            return Err(AppError::authentication("Email not confirmed"));
        }

        let expires_at = Utc::now() + Duration::hours(self.session_ttl_hours);
        let session = self.session_repo.create(user.id, expires_at).await?;

        let (access_token, expires_at) =
            self.encoder
                .generate_access_token(user.id, session.id, &user.email)?;

        info!(user_id = %user.id, session_id = %session.id, "User signed in");

        Ok(SignInResult {
            user,
            session,
            access_token,
            expires_at,
        })
    }

    /// Signs out by revoking the session row.
    ///
    /// Tokens carrying this session id are rejected from here on.
    pub async fn sign_out(&self, session_id: Uuid) -> Result<(), AppError> {
        let revoked = self.session_repo.revoke(session_id).await?;
        if !revoked {
            return Err(AppError::session("Session not found or already revoked"));
        }

        info!(session_id = %session_id, "User signed out");
        Ok(())
    }

    /// Validates that the session behind a token is still live.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::session("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::session("Session expired or revoked"));
        }

        Ok(session)
    }
}
