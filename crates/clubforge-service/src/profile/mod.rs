//! Profile services.

pub mod service;

pub use service::ProfileService;
