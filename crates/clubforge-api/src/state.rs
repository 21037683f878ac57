//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use clubforge_auth::jwt::decoder::JwtDecoder;
use clubforge_auth::session::manager::SessionManager;
use clubforge_core::config::AppConfig;
use clubforge_database::repositories::user::UserRepository;
use clubforge_service::account::AccountService;
use clubforge_service::club::ClubService;
use clubforge_service::feed::ChangeFeed;
use clubforge_service::membership::MembershipService;
use clubforge_service::profile::ProfileService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Domain event broadcast bus
    pub feed: ChangeFeed,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository, for rendering the authenticated account
    pub user_repo: Arc<UserRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Club directory service
    pub club_service: Arc<ClubService>,
    /// Membership service
    pub membership_service: Arc<MembershipService>,
    /// Profile service
    pub profile_service: Arc<ProfileService>,
    /// Account (sign-up, confirmation) service
    pub account_service: Arc<AccountService>,
}
