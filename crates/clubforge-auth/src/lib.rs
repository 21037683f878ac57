//! # clubforge-auth
//!
//! Authentication building blocks: Argon2id password hashing, password
//! policy validation, JWT access tokens, and the session lifecycle
//! manager (sign-in, sign-out, validation).

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::SessionManager;
