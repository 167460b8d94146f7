//! Todo Form Component
//!
//! Inline form for creating a new todo.

use leptos::html;
use leptos::prelude::*;

use crate::config::UiConfig;
use crate::store::{store_set_adding, store_submit_todo, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();
    let placeholder = expect_context::<UiConfig>().placeholder;

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the input as soon as the form opens
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_submit_todo(&store, new_text.get_untracked()).is_ok() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <div class="todo-form-input-row">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder=placeholder
                    class:invalid=move || store.form_error().get().is_some()
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        set_new_text.set(event_target_value(&ev));
                        store.form_error().set(None);
                    }
                />
                <button type="submit">"Add"</button>
                <button type="button" class="cancel-btn" on:click=move |_| store_set_adding(&store, false)>
                    "Cancel"
                </button>
            </div>
            {move || store.form_error().get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </form>
    }
}
