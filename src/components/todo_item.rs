//! Todo Item Component
//!
//! A single row in the todo list.

use leptos::prelude::*;
use todo_flow_domain::{Task, TodoAction};

use crate::components::DeleteConfirmButton;
use crate::store::{store_dispatch, use_app_store};

/// A single todo row
#[component]
pub fn TodoItem(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| {
                    let _ = store_dispatch(&store, TodoAction::Toggle(id));
                }
            />

            // Text
            <span class="todo-text">{task.text}</span>

            // Delete button
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| {
                    let _ = store_dispatch(&store, TodoAction::Remove(id));
                }
            />
        </div>
    }
}
