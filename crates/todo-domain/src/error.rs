//! Domain Errors
//!
//! Every error here is a validation outcome. None of them is fatal.

use thiserror::Error;

use crate::task::TaskId;

/// Common result type for domain operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Reasons an action is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo text cannot be empty")]
    EmptyText,
    #[error("No todo with id {0}")]
    TaskNotFound(TaskId),
    #[error("Unknown filter: {0:?}")]
    InvalidFilter(String),
    #[error("No todo ids left to assign")]
    IdsExhausted,
    #[error("Duplicate todo id {0}")]
    DuplicateTaskId(TaskId),
    #[error("Todo id {task_id} is not below next id {next_id}")]
    StaleNextId { next_id: TaskId, task_id: TaskId },
}
