//! Stats Card Component
//!
//! Progress overview shown once there is at least one todo.

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Inline style for the progress bar fill
pub(crate) fn progress_style(percentage: u8) -> String {
    format!("width: {}%;", percentage.min(100))
}

#[component]
fn StatCell(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-cell">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Completion percentage, progress bar and counters
#[component]
pub fn StatsCard() -> impl IntoView {
    let stats = use_todo_context().stats;

    view! {
        <Show when=move || stats.get().has_tasks()>
            <section class="stats-card">
                <div class="stats-header">
                    <h2>"Progress Overview"</h2>
                    <div class="stats-percentage">
                        {move || format!("{}%", stats.get().completion_percentage)}
                    </div>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style=move || progress_style(stats.get().completion_percentage)
                    ></div>
                </div>
                <div class="stats-grid">
                    <StatCell label="Total" value=Signal::derive(move || stats.get().total) />
                    <StatCell label="Active" value=Signal::derive(move || stats.get().active) />
                    <StatCell label="Completed" value=Signal::derive(move || stats.get().completed) />
                </div>
            </section>
        </Show>
    }
}
