//! Dashboard page: authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from `/` when signed in and after login/register. Logging out here
//! clears the session; the route guard then sends the visitor to `/login`.

use auth::{AuthState, RouteTable};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionHandle;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let routes = *expect_context::<RouteTable>().config();
    let navigate = use_navigate();

    let display_name = move || {
        auth.get()
            .current_user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let email = move || {
        auth.get()
            .current_user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.with_value(|s| s.logout());
        navigate(routes.login, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">
                    {display_name}
                    " ("
                    <span class="toolbar__self-method">{email}</span>
                    ")"
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <main class="dashboard-page__body">
                <h1>"Welcome, " {display_name}</h1>
                <a class="btn" href=routes.tasks>"Open tasks"</a>
            </main>
        </div>
    }
}
