//! Repository implementations, one per table.

pub mod club;
pub mod membership;
pub mod profile;
pub mod session;
pub mod user;

pub use club::ClubRepository;
pub use membership::MembershipRepository;
pub use profile::ProfileRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
