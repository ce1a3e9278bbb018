//! Persistent list store over local key-value slots.
//!
//! # Responsibility
//! - Define the slot store contract (load with fallback, synchronous save).
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - `load` never surfaces an error; absent or corrupt data falls back to
//!   the caller-supplied default.
//! - Every collection mutation is written through immediately, no batching.
//!
//! # See also
//! - docs/architecture/persistence.md

pub mod slot;
pub mod task_slot;
