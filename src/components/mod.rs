//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers set up in
//! `app::App`.

pub mod guarded;
