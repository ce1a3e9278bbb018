//! Aggregate stats projection over the full collection.
//!
//! # Responsibility
//! - Derive summary counts (total, completed, pending, completion rate) and
//!   per-priority pending counts from the current collection snapshot.
//!
//! # Invariants
//! - Always recomputed from the full, unfiltered collection; never cached.
//! - `completion_rate` is 0 for the empty collection (no division by zero).

use crate::model::task::{Priority, Task};

/// Summary counts derived from the full task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of completed tasks, rounded to the nearest integer.
    pub completion_rate: u32,
    /// Not-completed counts per priority, for at-a-glance breakdown.
    pub pending_high: usize,
    pub pending_medium: usize,
    pub pending_low: usize,
}

impl TaskStats {
    /// Computes stats for the given collection snapshot.
    pub fn for_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let pending = total - completed;

        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            pending,
            completion_rate,
            pending_high: pending_count(tasks, Priority::High),
            pending_medium: pending_count(tasks, Priority::Medium),
            pending_low: pending_count(tasks, Priority::Low),
        }
    }

    pub fn pending_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.pending_high,
            Priority::Medium => self.pending_medium,
            Priority::Low => self.pending_low,
        }
    }
}

fn pending_count(tasks: &[Task], priority: Priority) -> usize {
    tasks
        .iter()
        .filter(|task| task.priority == priority && !task.completed)
        .count()
}
