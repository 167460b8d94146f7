//! Todo Filters Component
//!
//! One button per filter, each with its count.

use leptos::prelude::*;
use todo_flow_domain::{Filter, TodoAction};

use crate::context::use_todo_context;
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn TodoFilters() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_todo_context();

    view! {
        <div class="filter-bar">
            <span class="filter-icon">"⏷"</span>
            {Filter::ALL.into_iter().map(move |filter| {
                let is_active = move || ctx.filter.get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            let _ = store_dispatch(&store, TodoAction::SetFilter(filter));
                        }
                    >
                        {filter.label()}
                        <span class="filter-count">
                            {move || ctx.stats.get().count_for(filter)}
                        </span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
