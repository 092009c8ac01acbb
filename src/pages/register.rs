//! Registration page. A successful registration logs the user straight in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use auth::RouteTable;

use crate::state::auth::{SessionHandle, submit_register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let routes = *expect_context::<RouteTable>().config();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = session.with_value(|s| submit_register(s, &name.get(), &email.get(), &password.get()));
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
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=routes.login>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
