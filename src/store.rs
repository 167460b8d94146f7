//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Task state only
//! changes through `store_dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_flow_domain::{TodoAction, TodoResult, TodoState};
use tracing::debug;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks and current filter
    pub todos: TodoState,
    /// Whether the inline new-todo form is shown
    pub is_adding_todo: bool,
    /// Validation message under the new-todo form
    pub form_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an action to the task state.
///
/// Rejected actions leave the state untouched and are returned to the caller.
pub fn store_dispatch(store: &AppStore, action: TodoAction) -> TodoResult<()> {
    let next = store.todos().read_untracked().apply(action.clone());
    match next {
        Ok(state) => {
            store.todos().set(state);
            Ok(())
        }
        Err(err) => {
            debug!(?action, %err, "action rejected");
            Err(err)
        }
    }
}

/// Add a todo from the form, recording validation feedback
pub fn store_submit_todo(store: &AppStore, text: String) -> TodoResult<()> {
    match store_dispatch(store, TodoAction::Add(text)) {
        Ok(()) => {
            store.form_error().set(None);
            store.is_adding_todo().set(false);
            Ok(())
        }
        Err(err) => {
            store.form_error().set(Some(err.to_string()));
            Err(err)
        }
    }
}

/// Show or hide the new-todo form
pub fn store_set_adding(store: &AppStore, adding: bool) {
    store.is_adding_todo().set(adding);
    if !adding {
        store.form_error().set(None);
    }
}
