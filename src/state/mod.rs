//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tasks`) so individual pages can depend
//! on small focused models.

pub mod auth;
pub mod tasks;
