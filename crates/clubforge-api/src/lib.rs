//! # clubforge-api
//!
//! HTTP API layer for ClubForge built on Axum.
//!
//! Provides the REST endpoints, the change-feed WebSocket upgrade,
//! middleware (CORS, logging, compression), extractors, DTOs, and the
//! domain-error to HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
