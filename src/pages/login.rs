//! Login page with email + password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use auth::RouteTable;

use crate::state::auth::{SessionHandle, submit_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let routes = *expect_context::<RouteTable>().config();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = session.with_value(|s| submit_login(s, &email.get(), &password.get()));
        if outcome.success {
            password.set(String::new());
            navigate(routes.dashboard, NavigateOptions::default());
        } else {
            info.set(outcome.error.unwrap_or_default());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Taskdeck"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=routes.register>"Register"</a>
                </p>
            </div>
        </div>
    }
}
