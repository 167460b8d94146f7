//! Todo State
//!
//! The task collection and current filter, changed only through
//! `TodoState::apply`, which returns the next state and never mutates `self`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TodoError, TodoResult};
use crate::filter::Filter;
use crate::task::{Task, TaskId};

/// Intents dispatched by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add(String),
    Toggle(TaskId),
    Remove(TaskId),
    ClearCompleted,
    CompleteAll,
    SetFilter(Filter),
}

/// Task collection in insertion order plus the current filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodoState")]
pub struct TodoState {
    tasks: Vec<Task>,
    filter: Filter,
    /// Next id to hand out; ids are never reused
    next_id: TaskId,
}

/// Deserialized shape, checked against the id invariants before use
#[derive(Deserialize)]
struct RawTodoState {
    tasks: Vec<Task>,
    #[serde(default)]
    filter: Filter,
    next_id: TaskId,
}

impl TryFrom<RawTodoState> for TodoState {
    type Error = TodoError;

    fn try_from(raw: RawTodoState) -> TodoResult<Self> {
        let mut seen = HashSet::with_capacity(raw.tasks.len());
        for task in &raw.tasks {
            if !seen.insert(task.id) {
                return Err(TodoError::DuplicateTaskId(task.id));
            }
            if task.id >= raw.next_id {
                return Err(TodoError::StaleNextId { next_id: raw.next_id, task_id: task.id });
            }
            if task.text.trim().is_empty() {
                return Err(TodoError::EmptyText);
            }
        }
        Ok(Self {
            tasks: raw.tasks,
            filter: raw.filter,
            next_id: raw.next_id,
        })
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All,
            next_id: 1,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Apply one action, producing the next state.
    ///
    /// On `Err` the caller keeps its current state; nothing is partially applied.
    pub fn apply(&self, action: TodoAction) -> TodoResult<TodoState> {
        let mut next = self.clone();
        match action {
            TodoAction::Add(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(TodoError::EmptyText);
                }
                let id = next.next_id;
                next.next_id = id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
                next.tasks.push(Task::new(id, text));
                debug!(id, "added todo");
            }
            TodoAction::Toggle(id) => {
                let task = next.task_mut(id)?;
                task.completed = !task.completed;
                debug!(id, completed = task.completed, "toggled todo");
            }
            TodoAction::Remove(id) => {
                let index = next
                    .tasks
                    .iter()
                    .position(|task| task.id == id)
                    .ok_or(TodoError::TaskNotFound(id))?;
                next.tasks.remove(index);
                debug!(id, "removed todo");
            }
            TodoAction::ClearCompleted => {
                next.tasks.retain(Task::is_active);
                debug!(removed = self.tasks.len() - next.tasks.len(), "cleared completed todos");
            }
            TodoAction::CompleteAll => {
                for task in next.tasks.iter_mut() {
                    task.completed = true;
                }
                debug!(count = next.tasks.len(), "completed all todos");
            }
            TodoAction::SetFilter(filter) => {
                next.filter = filter;
                debug!(%filter, "filter changed");
            }
        }
        Ok(next)
    }

    /// Set the filter from its string form, rejecting unknown values
    pub fn set_filter_str(&self, value: &str) -> TodoResult<TodoState> {
        let filter = value.parse::<Filter>()?;
        self.apply(TodoAction::SetFilter(filter))
    }

    pub fn add(&self, text: impl Into<String>) -> TodoResult<TodoState> {
        self.apply(TodoAction::Add(text.into()))
    }

    pub fn toggle(&self, id: TaskId) -> TodoResult<TodoState> {
        self.apply(TodoAction::Toggle(id))
    }

    pub fn remove(&self, id: TaskId) -> TodoResult<TodoState> {
        self.apply(TodoAction::Remove(id))
    }

    pub fn clear_completed(&self) -> TodoResult<TodoState> {
        self.apply(TodoAction::ClearCompleted)
    }

    pub fn complete_all(&self) -> TodoResult<TodoState> {
        self.apply(TodoAction::CompleteAll)
    }

    pub fn set_filter(&self, filter: Filter) -> TodoResult<TodoState> {
        self.apply(TodoAction::SetFilter(filter))
    }

    fn task_mut(&mut self, id: TaskId) -> TodoResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TodoError::TaskNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(state: &TodoState) -> Vec<&str> {
        state.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_active_task() {
        let state = TodoState::new().add("Buy milk").unwrap();
        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.tasks()[0].text, "Buy milk");
        assert!(!state.tasks()[0].completed);
    }

    #[test]
    fn test_add_trims_text() {
        let state = TodoState::new().add("  Walk dog \n").unwrap();
        assert_eq!(texts(&state), vec!["Walk dog"]);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let state = TodoState::new();
        assert_eq!(state.add(""), Err(TodoError::EmptyText));
        assert_eq!(state.add(" \t\n"), Err(TodoError::EmptyText));
        assert!(state.is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_self() {
        let state = TodoState::new().add("a").unwrap();
        let before = state.clone();
        let _ = state.toggle(1).unwrap();
        let _ = state.remove(1).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let state = TodoState::new().add("a").unwrap();
        assert_eq!(state.toggle(42), Err(TodoError::TaskNotFound(42)));
    }

    #[test]
    fn test_remove_unknown_id() {
        let state = TodoState::new().add("a").unwrap();
        assert_eq!(state.remove(7), Err(TodoError::TaskNotFound(7)));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let state = TodoState::new()
            .add("a").unwrap()
            .add("b").unwrap()
            .remove(2).unwrap()
            .add("c").unwrap();
        let ids: Vec<TaskId> = state.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_set_filter_str() {
        let state = TodoState::new();
        assert_eq!(state.set_filter_str("active").unwrap().filter(), Filter::Active);
        assert_eq!(
            state.set_filter_str("archived"),
            Err(TodoError::InvalidFilter("archived".to_string()))
        );
        assert_eq!(state.filter(), Filter::All);
    }

    #[test]
    fn test_add_when_ids_exhausted() {
        let mut state = TodoState::new().add("a").unwrap();
        state.next_id = TaskId::MAX;
        assert_eq!(state.add("b"), Err(TodoError::IdsExhausted));
        assert_eq!(state.tasks().len(), 1);

        // The last id below MAX is still handed out
        state.next_id = TaskId::MAX - 1;
        let state = state.add("b").unwrap();
        assert_eq!(state.get(TaskId::MAX - 1).unwrap().text, "b");
        assert_eq!(state.add("c"), Err(TodoError::IdsExhausted));
    }

    #[test]
    fn test_deserialize_valid_state() {
        let state = TodoState::new().add("a").unwrap().add("b").unwrap().toggle(2).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: TodoState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        let restored = restored.add("c").unwrap();
        assert_eq!(restored.get(3).unwrap().text, "c");
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"{
            "tasks": [
                { "id": 1, "text": "a", "completed": false },
                { "id": 1, "text": "b", "completed": false }
            ],
            "filter": "all",
            "next_id": 2
        }"#;
        let err = serde_json::from_str::<TodoState>(json).unwrap_err();
        assert!(err.to_string().contains(&TodoError::DuplicateTaskId(1).to_string()));
    }

    #[test]
    fn test_deserialize_rejects_stale_next_id() {
        let json = r#"{
            "tasks": [{ "id": 1, "text": "a", "completed": false }],
            "next_id": 1
        }"#;
        let err = serde_json::from_str::<TodoState>(json).unwrap_err();
        assert!(err.to_string().contains("next id 1"));
    }

    #[test]
    fn test_deserialize_rejects_blank_text() {
        let json = r#"{
            "tasks": [{ "id": 1, "text": "  ", "completed": false }],
            "next_id": 2
        }"#;
        assert!(serde_json::from_str::<TodoState>(json).is_err());
    }

    #[test]
    fn test_complete_all() {
        let state = TodoState::new()
            .add("a").unwrap()
            .add("b").unwrap()
            .toggle(1).unwrap()
            .complete_all().unwrap();
        assert!(state.tasks().iter().all(|t| t.completed));
        assert_eq!(texts(&state), vec!["a", "b"]);
    }
}
