//! Tasks page: the signed-in user's checklist, persisted in localStorage.

use auth::{AuthState, Item, RouteTable};
use leptos::prelude::*;

use crate::state::auth::SessionHandle;
use crate::state::tasks::TaskList;
use crate::util::storage::{load_json, save_json};

#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let routes = *expect_context::<RouteTable>().config();

    // The guard only renders this page with a session present.
    let storage_key = auth
        .get_untracked()
        .current_user
        .map(|user| session.with_value(|s| s.config().tasks_key(&user.id)));

    let initial = storage_key
        .as_deref()
        .and_then(|key| session.with_value(|s| load_json::<Vec<Item>>(s.storage(), key)))
        .unwrap_or_default();
    let tasks = RwSignal::new(TaskList::new(initial));
    let draft = RwSignal::new(String::new());

    let persist = move || {
        let Some(key) = storage_key.as_deref() else {
            return;
        };
        let items = tasks.with_untracked(|t| t.items.clone());
        if let Err(e) = session.with_value(|s| save_json(s.storage(), key, &items)) {
            log::warn!("failed to save tasks: {e}");
        }
    };

    let persist_add = persist.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut added = false;
        tasks.update(|t| added = t.add(&draft.get_untracked()));
        if added {
            draft.set(String::new());
            persist_add();
        }
    };

    let persist_clear = persist.clone();
    let on_clear = move |_| {
        tasks.update(|t| {
            t.clear_checked();
        });
        persist_clear();
    };

    view! {
        <div class="tasks-page">
            <header class="dashboard-page__header toolbar">
                <a class="btn" href=routes.dashboard>"← Dashboard"</a>
                <span class="toolbar__title">"Tasks"</span>
                <span class="toolbar__spacer"></span>
                <span class="tasks-page__remaining">
                    {move || format!("{} remaining", tasks.with(TaskList::remaining))}
                </span>
            </header>

            <form class="tasks-page__add" on:submit=on_add>
                <input
                    class="login-input"
                    type="text"
                    placeholder="New task"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Add"</button>
            </form>

            <ul class="tasks-page__list">
                {move || {
                    let persist = persist.clone();
                    tasks
                        .get()
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let persist_toggle = persist.clone();
                            let persist_remove = persist.clone();
                            let class = if item.checked { "tasks-page__item tasks-page__item--done" } else { "tasks-page__item" };
                            view! {
                                <li class=class>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=item.checked
                                            on:change=move |_| {
                                                tasks.update(|t| {
                                                    t.toggle(index);
                                                });
                                                persist_toggle();
                                            }
                                        />
                                        <span>{item.title}</span>
                                    </label>
                                    <button
                                        class="btn tasks-page__remove"
                                        title="Remove"
                                        on:click=move |_| {
                                            tasks.update(|t| {
                                                t.remove(index);
                                            });
                                            persist_remove();
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <button class="btn tasks-page__clear" on:click=on_clear>
                "Clear completed"
            </button>
        </div>
    }
}
