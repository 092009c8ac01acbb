//! Route guard wrappers around page views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in [`Guarded`]. The decision is made from the
//! `RwSignal<AuthState>` context before the page view is built, and re-made
//! whenever that signal changes, so a logout anywhere immediately sends a
//! protected page back to login.

use auth::{AuthState, RouteTable, guard};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::util::auth::redirect_for;

/// Render `children` only if the guard allows `path` under the current
/// auth state; otherwise redirect.
#[component]
pub fn Guarded(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = expect_context::<RouteTable>();

    move || match redirect_for(&table, path, &auth.get()) {
        None => children().into_any(),
        Some(to) => {
            log::debug!("guard redirect {path} -> {to}");
            view! { <Redirect path=to/> }.into_any()
        }
    }
}

/// `/` has no page; it is resolved on every visit.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = expect_context::<RouteTable>();
    let to = guard::resolve_root(&auth.get_untracked(), table.config());
    view! { <Redirect path=to/> }
}
