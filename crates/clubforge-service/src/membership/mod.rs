//! Membership services.

pub mod service;

pub use service::MembershipService;
