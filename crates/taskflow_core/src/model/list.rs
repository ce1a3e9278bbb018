//! Ordered task collection with pure mutation operations.
//!
//! # Responsibility
//! - Hold the in-memory, newest-first list of task records.
//! - Provide add/toggle/remove as pure collection-to-collection functions.
//!
//! # Invariants
//! - Insertion happens at the head; existing order is otherwise preserved.
//! - No operation mutates a task in place; each produces a new list value.
//! - Lookup misses (toggle/remove on an unknown id) are no-ops, not errors.

use serde::{Deserialize, Serialize};

use super::task::{Priority, Task, TaskId};

/// Newest-first collection of task records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a new list with a fresh task prepended.
    ///
    /// Text that trims to nothing is silently rejected and the list is
    /// returned unchanged.
    pub fn add(&self, text: &str, priority: Priority, category: Option<&str>) -> Self {
        match Task::new(text, priority, category) {
            Ok(task) => {
                let mut tasks = Vec::with_capacity(self.0.len() + 1);
                tasks.push(task);
                tasks.extend(self.0.iter().cloned());
                Self(tasks)
            }
            Err(_) => self.clone(),
        }
    }

    /// Returns a new list with `completed` flipped on the matching task.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn toggle(&self, id: TaskId) -> Self {
        Self(
            self.0
                .iter()
                .map(|task| {
                    if task.id == id {
                        let mut toggled = task.clone();
                        toggled.completed = !task.completed;
                        toggled
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        )
    }

    /// Returns a new list without the matching task.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn remove(&self, id: TaskId) -> Self {
        Self(
            self.0
                .iter()
                .filter(|task| task.id != id)
                .cloned()
                .collect(),
        )
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
