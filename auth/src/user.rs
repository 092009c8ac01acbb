//! Stored records and the derived auth view.
//!
//! DESIGN
//! ======
//! `User` is the only shape that ever reaches the session key or the UI.
//! `CredentialRecord` embeds it with the password digest and stays inside the
//! credential collection.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Public profile of a registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Timestamp-derived identifier assigned at registration.
    pub id: String,
    /// Natural key; unique across credential records (exact match).
    pub email: String,
    /// Display name.
    pub name: String,
}

/// A user plus their password digest, as stored under the users key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(flatten)]
    pub user: User,
    /// Output of [`crate::digest`], never the plaintext.
    pub password: String,
}

impl CredentialRecord {
    /// Strip the digest, leaving the session-safe profile.
    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }

    fn matches(&self, email: &str, password_digest: &str) -> bool {
        self.user.email == email && self.password == password_digest
    }

    /// Find the record whose email and digest both match exactly.
    #[must_use]
    pub fn find<'a>(records: &'a [Self], email: &str, password_digest: &str) -> Option<&'a Self> {
        records.iter().find(|r| r.matches(email, password_digest))
    }
}

/// Read-only view of the session, recomputed on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Derive the state from the session user.
    #[must_use]
    pub fn from_user(current_user: Option<User>) -> Self {
        let is_authenticated = current_user.is_some();
        Self { current_user, is_authenticated }
    }
}

/// One entry in a user's task checklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub checked: bool,
}
