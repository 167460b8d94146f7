//! Todo-Flow Frontend App
//!
//! Single-page layout: header, stats card, todo panel, footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionBar, Footer, StatsCard, TodoFilters, TodoForm, TodoList};
use crate::config::UiConfig;
use crate::context::TodoContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide store, derived views and config to all children
    provide_context(store);
    provide_context(TodoContext::new(store));
    provide_context(config.clone());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>{config.title}</h1>
                    <p>{config.tagline}</p>
                </header>

                <StatsCard />

                <section class="todo-panel">
                    <div class="todo-panel-top">
                        <ActionBar />
                        <TodoFilters />
                    </div>

                    <Show when=move || store.is_adding_todo().get()>
                        <div class="todo-form-row">
                            <TodoForm />
                        </div>
                    </Show>

                    <TodoList />
                </section>

                <Footer />
            </main>
        </div>
    }
}
