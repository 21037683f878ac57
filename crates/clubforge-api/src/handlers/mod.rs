//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod club;
pub mod health;
pub mod profile;
pub mod ws;
