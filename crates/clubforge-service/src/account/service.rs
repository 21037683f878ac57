//! Account sign-up and email confirmation.
//!
//! Sign-in and sign-out live with the session layer
//! ([`SessionManager`](clubforge_auth::session::SessionManager)); this
//! service owns the registration side: creating the credential row, the
//! companion profile row, and walking the confirmation handshake.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use clubforge_auth::password::{PasswordHasher, PasswordValidator};
use clubforge_core::config::auth::AuthConfig;
use clubforge_core::error::AppError;
use clubforge_core::events::{AccountEvent, DomainEvent, EventPayload};
use clubforge_core::AppResult;
use clubforge_database::repositories::profile::ProfileRepository;
use clubforge_database::repositories::user::UserRepository;
use clubforge_entity::user::{CreateUser, User};

use crate::feed::ChangeFeed;

/// Handles registration and email confirmation.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Profile repository, for the sign-up companion row.
    profile_repo: Arc<ProfileRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    password_validator: Arc<PasswordValidator>,
    /// Change feed for account events.
    feed: ChangeFeed,
    /// Whether new accounts must confirm their email before signing in.
    require_confirmation: bool,
    /// Redirect reported after confirmation when sign-up gave none.
    default_confirm_redirect: String,
}

/// Request to register a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignUpRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Initial display name for the profile row.
    pub display_name: Option<String>,
    /// Where to send the user after they confirm their email.
    pub redirect_to: Option<String>,
}

/// Outcome of a successful sign-up.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    /// The created user.
    pub user: User,
    /// Whether the account still needs email confirmation to sign in.
    pub confirmation_required: bool,
}

/// Outcome of a successful confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmResult {
    /// The confirmed user's ID.
    pub user_id: Uuid,
    /// Where the user asked to land after confirming.
    pub redirect_to: String,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        profile_repo: Arc<ProfileRepository>,
        hasher: Arc<PasswordHasher>,
        password_validator: Arc<PasswordValidator>,
        feed: ChangeFeed,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            hasher,
            password_validator,
            feed,
            require_confirmation: config.require_confirmation,
            default_confirm_redirect: config.default_confirm_redirect.clone(),
        }
    }

    /// Registers a new account and its companion profile row.
    ///
    /// When confirmation is required the account is created unconfirmed
    /// with an outstanding token; sign-in is refused until the token is
    /// redeemed via [`confirm`](Self::confirm). A duplicate email reports
    /// `Conflict`.
    pub async fn sign_up(&self, req: SignUpRequest) -> AppResult<SignUpResult> {
        let email = req.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        self.password_validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                confirmation_token: self.require_confirmation.then(Uuid::new_v4),
                confirm_redirect_to: req.redirect_to,
                confirmed_at: (!self.require_confirmation).then(Utc::now),
            })
            .await?;

        self.profile_repo
            .create(user.id, req.display_name.as_deref())
            .await?;

        info!(
            user_id = %user.id,
            confirmation_required = self.require_confirmation,
            "Account created"
        );

        self.feed.publish(DomainEvent::new(
            Some(user.id),
            EventPayload::Account(AccountEvent::SignedUp { user_id: user.id }),
        ));

        Ok(SignUpResult {
            user,
            confirmation_required: self.require_confirmation,
        })
    }

    /// Redeems a confirmation token.
    ///
    /// Tokens are single-use: redemption clears the token, so replaying
    /// it reports the same error as a token that never existed.
    pub async fn confirm(&self, token: Uuid) -> AppResult<ConfirmResult> {
        let user = self
            .user_repo
            .find_by_confirmation_token(token)
            .await?
            .ok_or_else(|| AppError::validation("Invalid or expired confirmation token"))?;

        let user = self.user_repo.confirm(user.id).await?;

        info!(user_id = %user.id, "Email confirmed");

        self.feed.publish(DomainEvent::new(
            Some(user.id),
            EventPayload::Account(AccountEvent::Confirmed { user_id: user.id }),
        ));

        Ok(ConfirmResult {
            user_id: user.id,
            redirect_to: user
                .confirm_redirect_to
                .unwrap_or_else(|| self.default_confirm_redirect.clone()),
        })
    }
}
