//! Task collection use-case service.
//!
//! # Responsibility
//! - Hold the in-memory collection and run the mutate -> write-through cycle
//!   for every user action.
//! - Expose the derived projections (visible subset, aggregate stats).
//!
//! # Invariants
//! - In-memory state is authoritative during a session; the slot is the
//!   authoritative copy across sessions.
//! - Every state change is written through immediately; lookup misses change
//!   no state and skip the write.

use log::{debug, info};

use crate::model::list::TaskList;
use crate::model::task::{Priority, Task, TaskId};
use crate::query::filter::{visible_tasks, FilterSelector};
use crate::stats::TaskStats;
use crate::store::slot::{SlotStore, StoreResult};
use crate::store::task_slot::{load_task_list, save_task_list};

/// Use-case service wrapping the task collection and its slot store.
pub struct TaskService<S: SlotStore> {
    store: S,
    tasks: TaskList,
}

impl<S: SlotStore> TaskService<S> {
    /// Opens the service, loading the persisted collection.
    ///
    /// Absent or corrupt slot contents fall back to the empty collection.
    pub fn open(store: S) -> Self {
        let tasks = load_task_list(&store);
        info!(
            "event=service_open module=service status=ok task_count={}",
            tasks.len()
        );
        Self { store, tasks }
    }

    /// Current collection snapshot, newest first.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Adds a task and writes the collection through to the store.
    ///
    /// Returns `Ok(None)` without touching any state when `text` trims to
    /// nothing.
    ///
    /// # Errors
    /// - Store write failures propagate; the in-memory collection already
    ///   holds the new task and stays authoritative for the session.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        category: Option<&str>,
    ) -> StoreResult<Option<TaskId>> {
        let next = self.tasks.add(text, priority, category);
        if next.len() == self.tasks.len() {
            debug!("event=task_add module=service status=rejected reason=empty_text");
            return Ok(None);
        }

        let id = next.tasks().first().map(|task| task.id);
        self.commit(next)?;
        if let Some(id) = id {
            info!("event=task_add module=service status=ok id={id}");
        }
        Ok(id)
    }

    /// Flips completion on the matching task and writes through.
    ///
    /// An unknown id is a no-op, not an error, and skips the write.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        if !self.tasks.contains(id) {
            debug!("event=task_toggle module=service status=miss id={id}");
            return Ok(());
        }

        let next = self.tasks.toggle(id);
        self.commit(next)?;
        info!("event=task_toggle module=service status=ok id={id}");
        Ok(())
    }

    /// Deletes the matching task and writes through.
    ///
    /// An unknown id is a no-op, not an error, and skips the write.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        if !self.tasks.contains(id) {
            debug!("event=task_remove module=service status=miss id={id}");
            return Ok(());
        }

        let next = self.tasks.remove(id);
        self.commit(next)?;
        info!("event=task_remove module=service status=ok id={id}");
        Ok(())
    }

    /// Visible subset for the given selector and search term.
    ///
    /// Recomputed from the current snapshot on every call.
    pub fn visible(&self, selector: FilterSelector, search: &str) -> Vec<Task> {
        visible_tasks(self.tasks.tasks(), selector, search)
    }

    /// Aggregate stats over the full, unfiltered collection.
    pub fn stats(&self) -> TaskStats {
        TaskStats::for_tasks(self.tasks.tasks())
    }

    fn commit(&mut self, next: TaskList) -> StoreResult<()> {
        self.tasks = next;
        save_task_list(&self.store, &self.tasks)
    }
}
