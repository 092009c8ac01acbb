//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not a page
//! concern: `app::App` wraps every page in `components::guarded::Guarded`.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod tasks;
