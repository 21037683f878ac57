//! Explicit two-case result type for fetch-by-key operations.

use serde::{Deserialize, Serialize};

/// Outcome of a keyed lookup against the store.
///
/// Absence of a row (unknown slug, no membership for a user/club pair) is
/// a normal, renderable state rather than an error, so the façade returns
/// this type instead of `Option<T>` to force callers to handle both cases
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lookup<T> {
    /// The row exists.
    Found(T),
    /// No row matched the key.
    NotFound,
}

impl<T> Lookup<T> {
    /// Returns the found value or the given error.
    pub fn ok_or(self, err: crate::AppError) -> Result<T, crate::AppError> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound => Err(err),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Found(v),
            None => Self::NotFound,
        }
    }
}
