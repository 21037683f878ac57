//! # clubforge-core
//!
//! Core crate for ClubForge. Contains configuration schemas, shared
//! types, domain events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ClubForge crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::Lookup;
