//! # taskdeck
//!
//! Leptos client-side-rendered frontend for the task checklist app.
//!
//! This crate contains the router, pages, and browser glue. Session and
//! credential handling plus the route guard live in the `auth` crate; this
//! crate wires them to `window.localStorage` and Leptos signals.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic + log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(util::LOG_LEVEL);
    log::info!("taskdeck starting");
    leptos::mount::mount_to_body(app::App);
}
