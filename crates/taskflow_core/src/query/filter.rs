//! Filter selector and visible-subset computation.
//!
//! # Responsibility
//! - Define the active view criterion applied before search.
//! - Compute the visible subsequence of the collection for a selector and a
//!   free-text search term.
//!
//! # Invariants
//! - Output preserves input order; no reordering, no duplication.
//! - Filter and search predicates combine with logical AND.
//! - Priority-scoped views exclude completed tasks. This asymmetry is
//!   intentional product behavior, not a bug; see docs/architecture/data-model.md.

use crate::model::task::{Priority, Task};

/// Active view criterion applied before the search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterSelector {
    #[default]
    All,
    /// Not-completed tasks only.
    Active,
    Completed,
    /// Tasks of one priority, restricted to not-completed tasks.
    Priority(Priority),
}

impl FilterSelector {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Priority(priority) => priority.as_keyword(),
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            other => Priority::from_keyword(other).map(Self::Priority),
        }
    }

    /// Returns whether `task` satisfies this selector.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
            Self::Priority(priority) => task.priority == *priority && !task.completed,
        }
    }
}

/// Computes the visible subset of `tasks` for a selector and search term.
///
/// Pure and total: deterministic, side-effect-free, recomputed on demand.
/// The empty search term matches everything.
pub fn visible_tasks(tasks: &[Task], selector: FilterSelector, search: &str) -> Vec<Task> {
    let needle = search.to_lowercase();

    tasks
        .iter()
        .filter(|task| selector.matches(task) && matches_search(task, &needle))
        .cloned()
        .collect()
}

fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if task.text.to_lowercase().contains(needle) {
        return true;
    }

    task.category
        .as_deref()
        .is_some_and(|category| category.to_lowercase().contains(needle))
}
