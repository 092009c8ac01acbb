//! Failures reported by [`crate::SessionStore`] operations.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Serialize;

use crate::storage::StorageError;
use crate::user::User;

/// Error returned by `register` and `login`.
///
/// `EmailTaken` and `InvalidCredentials` are expected outcomes the UI shows
/// verbatim; the other two indicate damaged or full browser storage.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Register was called with an email already present in the collection.
    #[error("Email already registered")]
    EmailTaken,
    /// No record matched both email and digest. Deliberately does not say
    /// which part was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The stored credential collection is not valid JSON.
    #[error("stored credentials are unreadable: {0}")]
    CorruptCredentials(#[from] serde_json::Error),
    /// Durable storage rejected a write.
    #[error("storage write failed: {0}")]
    Storage(#[from] StorageError),
}

/// Flag-plus-message result shape rendered by the pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    #[must_use]
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

impl From<Result<User, AuthError>> for AuthOutcome {
    fn from(result: Result<User, AuthError>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}
