//! Application Context
//!
//! Derived views of the store, provided via Leptos Context API so every
//! component reads the same memos.

use leptos::prelude::*;
use todo_flow_domain::{select_filtered, select_stats, Filter, Stats, Task};

use crate::store::{AppStore, AppStateStoreFields};

/// App-wide memos provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Tasks visible under the current filter
    pub filtered: Memo<Vec<Task>>,
    /// Counts over the whole collection
    pub stats: Memo<Stats>,
    pub filter: Memo<Filter>,
}

impl TodoContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            filtered: Memo::new(move |_| {
                store.todos().with(|state| select_filtered(state).into_iter().cloned().collect())
            }),
            stats: Memo::new(move |_| store.todos().with(select_stats)),
            filter: Memo::new(move |_| store.todos().with(|state| state.filter())),
        }
    }
}

pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
