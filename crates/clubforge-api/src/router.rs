//! Route definitions for the ClubForge HTTP API.
//!
//! REST routes are organized by domain and mounted under `/api`; the
//! change-feed WebSocket lives at `/ws`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(club_routes())
        .merge(profile_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, signin, signout, confirm, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin))
        .route("/auth/signout", post(handlers::auth::signout))
        .route("/auth/confirm", get(handlers::auth::confirm))
        .route("/auth/me", get(handlers::auth::me))
}

/// Club directory and membership endpoints
fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(handlers::club::list_clubs))
        .route("/clubs", post(handlers::club::create_club))
        .route("/clubs/{club}", get(handlers::club::get_club))
        .route(
            "/clubs/{club}/membership",
            get(handlers::club::membership_status),
        )
        .route("/clubs/{club}/membership", post(handlers::club::join_club))
        .route("/memberships/{id}", delete(handlers::club::leave_club))
}

/// Profile endpoints for the current user
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile", put(handlers::profile::update_profile))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
