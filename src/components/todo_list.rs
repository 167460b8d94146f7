//! Todo List Component
//!
//! Filtered todos, or an empty-state message when there are none to show.

use leptos::prelude::*;
use todo_flow_domain::{Filter, Task, TaskId};

use crate::components::TodoItem;
use crate::context::use_todo_context;

/// `For` key of a row: stable across removals of other rows, changes when
/// the row's checkbox state does
pub(crate) fn row_key(task: &Task) -> (TaskId, bool) {
    (task.id, task.completed)
}

/// Text shown in place of an empty list
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmptyMessage {
    pub icon: &'static str,
    pub title: String,
    pub hint: &'static str,
}

/// Pick the empty-state message for a list with nothing visible
pub(crate) fn empty_message(total: usize, filter: Filter) -> EmptyMessage {
    if total == 0 {
        return EmptyMessage {
            icon: "○",
            title: "No todos yet".to_string(),
            hint: "Add your first todo to get started!",
        };
    }
    let hint = match filter {
        Filter::Active => "All your todos are completed!",
        Filter::Completed => "No completed todos yet, keep going!",
        Filter::All => "",
    };
    EmptyMessage {
        icon: "⏷",
        title: format!("No {} todos", filter),
        hint,
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let ctx = use_todo_context();
    let message = move || empty_message(ctx.stats.get().total, ctx.filter.get());

    view! {
        {move || {
            let EmptyMessage { icon, title, hint } = message();
            view! {
                <div class="empty-state">
                    <div class="empty-icon">{icon}</div>
                    <p class="empty-title">{title}</p>
                    <p class="empty-hint">{hint}</p>
                </div>
            }
        }}
    }
}

#[component]
pub fn TodoList() -> impl IntoView {
    let filtered = use_todo_context().filtered;

    view! {
        <div class="todo-list">
            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                <For
                    each=move || filtered.get()
                    key=row_key
                    children=move |task| view! { <TodoItem task=task /> }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_flow_domain::TodoState;

    #[test]
    fn test_row_keys_survive_middle_removal() {
        let state = TodoState::new()
            .add("a").unwrap()
            .add("b").unwrap()
            .add("c").unwrap();
        let before: Vec<_> = state.tasks().iter().map(row_key).collect();

        let after: Vec<_> = state.remove(2).unwrap().tasks().iter().map(row_key).collect();
        assert_eq!(after, vec![before[0], before[2]]);
    }

    #[test]
    fn test_row_key_changes_on_toggle() {
        let state = TodoState::new().add("a").unwrap();
        let toggled = state.toggle(1).unwrap();
        assert_ne!(row_key(&state.tasks()[0]), row_key(&toggled.tasks()[0]));
    }

    #[test]
    fn test_empty_collection_message() {
        for filter in Filter::ALL {
            let message = empty_message(0, filter);
            assert_eq!(message.title, "No todos yet");
            assert_eq!(message.hint, "Add your first todo to get started!");
        }
    }

    #[test]
    fn test_filtered_out_message() {
        let active = empty_message(3, Filter::Active);
        assert_eq!(active.title, "No active todos");
        assert_eq!(active.hint, "All your todos are completed!");

        let completed = empty_message(3, Filter::Completed);
        assert_eq!(completed.title, "No completed todos");
        assert_eq!(completed.hint, "No completed todos yet, keep going!");
    }
}
