//! Root application component with routing and context providers.

use auth::{AuthConfig, AuthState, RouteTable, SessionStore};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::{Guarded, RootRedirect};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage, tasks::TasksPage};
use crate::state::auth::SessionHandle;
use crate::util::{clock, storage::BrowserStorage};

/// Root application component.
///
/// Builds the one session store for this page load, mirrors it into an
/// `RwSignal<AuthState>`, and provides both plus the route table as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(BrowserStorage::open(), AuthConfig::default(), clock::now_ms);
    let auth = RwSignal::new(store.auth_state());
    store.subscribe(move |state: &AuthState| auth.set(state.clone()));

    provide_context(auth);
    provide_context::<SessionHandle>(StoredValue::new_local(store));
    provide_context(RouteTable::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded path="/login"><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded path="/register"><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded path="/dashboard"><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| view! { <Guarded path="/tasks"><TasksPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
