//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical task record and its construction-time validation.
//! - Provide the ordered, newest-first collection with pure mutation ops.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` unique within a list.
//! - Collection operations never mutate in place; each returns a new list.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod list;
pub mod task;
