//! # clubforge-service
//!
//! The data-access façade: translates view intents into reads and writes
//! against the store and surfaces results or errors to the caller.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every operation that acts
//! "as the current user" takes an explicit [`SessionContext`].

pub mod account;
pub mod club;
pub mod context;
pub mod feed;
pub mod membership;
pub mod profile;

pub use account::AccountService;
pub use club::ClubService;
pub use context::SessionContext;
pub use feed::ChangeFeed;
pub use membership::MembershipService;
pub use profile::ProfileService;
