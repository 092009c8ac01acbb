//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides two contexts: the session store itself (for `login`,
//! `register`, `logout`) and an `RwSignal<AuthState>` that the store keeps in
//! sync. Route guards and user-aware components read the signal; only pages
//! that mutate the session touch the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{AuthOutcome, KeyValueStore, SessionStore};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// The app's session store over browser storage.
pub type Session = SessionStore<BrowserStorage>;

/// Context handle for the session store. The store is `!Send`, so it lives in
/// local arena storage.
pub type SessionHandle = StoredValue<Session, LocalStorage>;

/// Trimmed, non-empty login form input.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed, non-empty registration form input as `(name, email, password)`.
///
/// # Errors
///
/// Returns the message to show when any field is blank.
pub fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Run a login attempt and flatten it for display.
pub fn submit_login<S: KeyValueStore>(store: &SessionStore<S>, email: &str, password: &str) -> AuthOutcome {
    match validate_login_input(email, password) {
        Ok((email, password)) => store.login(&email, &password).into(),
        Err(message) => AuthOutcome::failed(message),
    }
}

/// Run a registration attempt and flatten it for display.
pub fn submit_register<S: KeyValueStore>(store: &SessionStore<S>, name: &str, email: &str, password: &str) -> AuthOutcome {
    match validate_register_input(name, email, password) {
        Ok((name, email, password)) => store.register(&email, &password, &name).into(),
        Err(message) => AuthOutcome::failed(message),
    }
}
