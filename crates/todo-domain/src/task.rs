//! Task Entity
//!
//! A single todo entry.

use serde::{Deserialize, Serialize};

/// Task identifier, assigned by `TodoState` on add
pub type TaskId = u32;

/// A todo entry with text and completion status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty label
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new active task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
