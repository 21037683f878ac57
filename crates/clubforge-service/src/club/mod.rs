//! Club directory services.

pub mod service;

pub use service::ClubService;
