//! Todo-Flow Domain Layer
//!
//! Task collection, filter and derived stats.
//! This layer has NO browser dependencies and is tested natively.

mod error;
mod filter;
mod selectors;
mod state;
mod task;

pub use error::{TodoError, TodoResult};
pub use filter::Filter;
pub use selectors::{select_filtered, select_stats, Stats};
pub use state::{TodoAction, TodoState};
pub use task::{Task, TaskId};
