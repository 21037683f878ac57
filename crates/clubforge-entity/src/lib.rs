//! # clubforge-entity
//!
//! Domain entities for ClubForge. Plain data models with sqlx row
//! mappings and serde derives; no I/O lives here.

pub mod club;
pub mod membership;
pub mod profile;
pub mod session;
pub mod user;

pub use club::Club;
pub use membership::Membership;
pub use profile::Profile;
pub use session::Session;
pub use user::User;
