//! Derived Views
//!
//! Pure functions of `TodoState`. Nothing here is cached; callers that want
//! memoization wrap these themselves.

use crate::filter::Filter;
use crate::state::TodoState;
use crate::task::Task;

/// Aggregate counts over the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// `round(100 * completed / total)`, 0 when there are no tasks
    pub completion_percentage: u8,
}

impl Stats {
    pub fn has_tasks(&self) -> bool {
        self.total != 0
    }

    pub fn has_active(&self) -> bool {
        self.active != 0
    }

    pub fn has_completed(&self) -> bool {
        self.completed != 0
    }

    /// Count shown next to each filter button
    pub fn count_for(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// Tasks matching the current filter, in store order
pub fn select_filtered(state: &TodoState) -> Vec<&Task> {
    let filter = state.filter();
    state.tasks().iter().filter(|task| filter.matches(task)).collect()
}

pub fn select_stats(state: &TodoState) -> Stats {
    let total = state.tasks().len();
    let completed = state.tasks().iter().filter(|task| task.completed).count();
    Stats {
        total,
        active: total - completed,
        completed,
        completion_percentage: percentage(completed, total),
    }
}

/// Integer round-half-up of `100 * part / whole`
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u8
}
