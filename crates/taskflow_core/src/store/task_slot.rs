//! Codec binding the task collection to its named slot.
//!
//! # Responsibility
//! - Read/write the `"tasks"` slot as a JSON array of task records.
//! - Recover as much data as possible from partially invalid slot contents.
//!
//! # Invariants
//! - A record that fails to decode (bad `createdAt`, blank text, unknown
//!   priority) is skipped with a warning; it never poisons the whole slot.
//! - Duplicate identifiers keep the first occurrence only.
//! - A slot value that is not a JSON array decodes to the empty list.

use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::store::slot::{SlotStore, StoreResult};
use log::warn;
use serde_json::Value;
use std::collections::HashSet;

/// Slot name holding the serialized task collection.
pub const TASKS_SLOT_KEY: &str = "tasks";

/// Loads the task collection from its slot, falling back to an empty list.
pub fn load_task_list<S: SlotStore>(store: &S) -> TaskList {
    let raw = store.load(TASKS_SLOT_KEY, Value::Null);
    decode_task_records(raw)
}

/// Writes the full task collection through to its slot.
pub fn save_task_list<S: SlotStore>(store: &S, list: &TaskList) -> StoreResult<()> {
    store.save(TASKS_SLOT_KEY, list)
}

fn decode_task_records(raw: Value) -> TaskList {
    let items = match raw {
        Value::Array(items) => items,
        Value::Null => return TaskList::new(),
        other => {
            warn!(
                "event=task_slot_decode module=store status=fallback reason=not_an_array kind={}",
                value_kind(&other)
            );
            return TaskList::new();
        }
    };

    let mut seen_ids = HashSet::new();
    let mut tasks = Vec::with_capacity(items.len());

    for item in items {
        let task = match serde_json::from_value::<Task>(item) {
            Ok(task) => task,
            Err(err) => {
                warn!("event=task_slot_decode module=store status=skip_record reason=invalid_record error={err}");
                continue;
            }
        };

        if task.text.trim().is_empty() {
            warn!(
                "event=task_slot_decode module=store status=skip_record reason=empty_text id={}",
                task.id
            );
            continue;
        }

        if !seen_ids.insert(task.id) {
            warn!(
                "event=task_slot_decode module=store status=skip_record reason=duplicate_id id={}",
                task.id
            );
            continue;
        }

        tasks.push(task);
    }

    TaskList::from(tasks)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
