//! Footer Component

use leptos::prelude::*;

use crate::config::UiConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let title = expect_context::<UiConfig>().title;
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="app-footer">
            <p>{format!("© {} {}. All rights reserved.", year, title)}</p>
        </footer>
    }
}
