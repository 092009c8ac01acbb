//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so the guard
//! decision for a path is computed here in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{AuthState, GuardDecision, RouteTable, guard};

/// Where to send the visitor instead of `path`, or `None` to render it.
pub fn redirect_for(table: &RouteTable, path: &str, state: &AuthState) -> Option<&'static str> {
    match guard::check(table.meta(path), state, table.config()) {
        GuardDecision::Allow => None,
        GuardDecision::Redirect(to) => Some(to),
    }
}
