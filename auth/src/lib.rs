//! Client-side session store and navigation guard.
//!
//! This crate owns "who is logged in" for the `taskdeck` client and the
//! per-transition route check that depends on it. It has no browser
//! dependencies: durable storage is abstracted behind [`KeyValueStore`] so the
//! store can run against `window.localStorage` in the app and against
//! [`MemoryStorage`] in tests.
//!
//! SECURITY
//! ========
//! Credentials live in browser storage and passwords are reduced with a
//! non-cryptographic [`digest`]. This is a demo-grade auth layer, not a
//! security boundary.

pub mod config;
pub mod digest;
pub mod error;
pub mod guard;
pub mod storage;
pub mod store;
pub mod user;

pub use config::{AuthConfig, RouteConfig};
pub use digest::digest;
pub use error::{AuthError, AuthOutcome};
pub use guard::{AuthPredicate, GuardDecision, Navigation, RouteMeta, RouteTable};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use store::{SessionStore, SubscriptionId};
pub use user::{AuthState, CredentialRecord, Item, User};
