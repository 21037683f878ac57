//! Account lifecycle services.

pub mod service;

pub use service::{AccountService, ConfirmResult, SignUpRequest, SignUpResult};
