//! Browser glue and small helpers used by pages and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window` (localStorage, `Date.now()`) lives here
//! behind the `csr` feature, so pages and state stay testable natively.

pub mod auth;
pub mod clock;
pub mod storage;

/// Console log level installed at startup.
#[cfg(feature = "csr")]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
