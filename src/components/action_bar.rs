//! Action Bar Component
//!
//! "Add Todo" plus the bulk actions, which only appear when they would do something.

use leptos::prelude::*;
use todo_flow_domain::TodoAction;

use crate::context::use_todo_context;
use crate::store::{store_dispatch, store_set_adding, use_app_store};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_app_store();
    let stats = use_todo_context().stats;

    let on_clear = move |_| {
        let _ = store_dispatch(&store, TodoAction::ClearCompleted);
    };
    let on_complete_all = move |_| {
        let _ = store_dispatch(&store, TodoAction::CompleteAll);
    };

    view! {
        <div class="action-bar">
            <button class="add-todo-btn" on:click=move |_| store_set_adding(&store, true)>
                <span class="icon">"+"</span>
                "Add Todo"
            </button>

            <Show when=move || stats.get().has_tasks()>
                <div class="bulk-actions">
                    <Show when=move || stats.get().has_completed()>
                        <button class="clear-completed-btn" on:click=on_clear>
                            <span class="icon">"🗑"</span>
                            "Clear Completed"
                        </button>
                    </Show>
                    <Show when=move || stats.get().has_active()>
                        <button class="complete-all-btn" on:click=on_complete_all>
                            <span class="icon">"✔"</span>
                            "Mark All Completed"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
