//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Server-side session lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Whether new accounts must confirm their email before signing in.
    #[serde(default = "default_true")]
    pub require_confirmation: bool,
    /// Redirect target used after confirmation when sign-up supplies none.
    #[serde(default = "default_confirm_redirect")]
    pub default_confirm_redirect: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_session_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_confirm_redirect() -> String {
    "/".to_string()
}
