//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskflow_core::db::open_store_db_in_memory;
use taskflow_core::{FilterSelector, Priority, SqliteSlotStore, TaskService};

fn main() {
    println!("taskflow_core version={}", taskflow_core::core_version());

    // Exercise one full mutate -> persist -> derive cycle against an
    // in-memory store to validate core wiring end to end.
    let conn = match open_store_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let mut service = TaskService::open(SqliteSlotStore::new(&conn));
    if let Err(err) = service.add("smoke check", Priority::Medium, None) {
        eprintln!("failed to add smoke task: {err}");
        std::process::exit(1);
    }

    let stats = service.stats();
    let visible = service.visible(FilterSelector::Active, "");
    println!(
        "taskflow_core smoke total={} pending={} visible={}",
        stats.total,
        stats.pending,
        visible.len()
    );
}
