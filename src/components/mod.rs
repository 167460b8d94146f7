//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod delete_confirm_button;
mod footer;
mod stats_card;
mod todo_filters;
mod todo_form;
mod todo_item;
mod todo_list;

pub use action_bar::ActionBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use stats_card::StatsCard;
pub use todo_filters::TodoFilters;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
