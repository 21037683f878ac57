//! ClubForge Server — community club directory backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{EnvFilter, fmt};

use clubforge_core::config::AppConfig;
use clubforge_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CLUBFORGE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClubForge v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = clubforge_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    clubforge_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(clubforge_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let session_repo = Arc::new(
        clubforge_database::repositories::session::SessionRepository::new(db_pool.clone()),
    );
    let club_repo = Arc::new(clubforge_database::repositories::club::ClubRepository::new(
        db_pool.clone(),
    ));
    let membership_repo = Arc::new(
        clubforge_database::repositories::membership::MembershipRepository::new(db_pool.clone()),
    );
    let profile_repo = Arc::new(
        clubforge_database::repositories::profile::ProfileRepository::new(db_pool.clone()),
    );

    // Sweep sessions that expired while the server was down.
    let swept = session_repo.delete_expired(Utc::now()).await?;
    if swept > 0 {
        tracing::info!(count = swept, "Removed expired sessions");
    }

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(clubforge_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(clubforge_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(clubforge_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(clubforge_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(clubforge_auth::session::manager::SessionManager::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        &config.auth,
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let feed = clubforge_service::feed::ChangeFeed::default();

    let club_service = Arc::new(clubforge_service::club::ClubService::new(
        Arc::clone(&club_repo),
        Arc::clone(&membership_repo),
    ));
    let membership_service = Arc::new(clubforge_service::membership::MembershipService::new(
        Arc::clone(&membership_repo),
        Arc::clone(&club_repo),
        feed.clone(),
    ));
    let profile_service = Arc::new(clubforge_service::profile::ProfileService::new(
        Arc::clone(&profile_repo),
        feed.clone(),
    ));
    let account_service = Arc::new(clubforge_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&profile_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        feed.clone(),
        &config.auth,
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = clubforge_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        feed,
        jwt_decoder,
        session_manager,
        user_repo,
        club_service,
        membership_service,
        profile_service,
        account_service,
    };

    let app = clubforge_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ClubForge server listening on {}", addr);

    // Drain in-flight connections after the signal, but never wait past
    // the configured grace period.
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            return match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(AppError::internal(format!("Server error: {}", e))),
                Err(e) => Err(AppError::internal(format!("Server task failed: {}", e))),
            };
        }
        _ = shutdown_signal() => {
            tracing::info!(
                "Shutdown signal received, draining connections for up to {}s",
                config.server.shutdown_grace_seconds
            );
            let _ = shutdown_tx.send(());
        }
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(Ok(Ok(()))) => tracing::info!("ClubForge server shut down gracefully"),
        Ok(Ok(Err(e))) => return Err(AppError::internal(format!("Server error: {}", e))),
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {}", e))),
        Err(_) => {
            tracing::warn!("Shutdown grace period elapsed, aborting open connections");
            server.abort();
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
