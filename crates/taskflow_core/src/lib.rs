//! Core domain logic for TaskFlow.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::TaskList;
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use query::filter::{visible_tasks, FilterSelector};
pub use service::task_service::TaskService;
pub use stats::TaskStats;
pub use store::slot::{SlotStore, SqliteSlotStore, StoreError, StoreResult};
pub use store::task_slot::{load_task_list, save_task_list, TASKS_SLOT_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
