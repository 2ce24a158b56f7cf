//! Example 01: Basic Operations
//!
//! This example walks through the core list operations: add, toggle,
//! filter, edit and clear completed.
//!
//! Run with: cargo run --example 01_basic_operations

use eyre::Result;
use todostore::{FilterMode, TaskListStore};

fn print_visible(store: &TaskListStore) {
    for task in store.visible_tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("   [{}] #{} {}", mark, task.id, task.text);
    }
    println!("   {} items left (filter: {})\n", store.items_left(), store.filter());
}

fn main() -> Result<()> {
    println!("TodoStore Basic Operations Example");
    println!("==================================\n");

    let mut store = TaskListStore::new();

    // ADD: blank text is ignored, the rest is trimmed
    println!("1. ADD - Adding tasks...");
    let milk = store.add("  buy milk  ");
    let report = store.add("write report");
    let blank = store.add("   ");
    println!("   Added: {:?}, {:?}; blank input gave {:?}", milk, report, blank);
    if let Some(n) = store.notification() {
        println!("   Notification: {}", n.message);
    }
    print_visible(&store);

    let (Some(milk), Some(report)) = (milk, report) else {
        return Err(eyre::eyre!("Expected both tasks to be added"));
    };

    // TOGGLE: completion flips, no notification
    println!("2. TOGGLE - Completing 'buy milk'...");
    store.dismiss_notification();
    store.toggle_complete(milk);
    println!("   Notification after toggle: {:?}", store.notification().map(|n| &n.message));
    print_visible(&store);

    // FILTER: views over the same collection
    println!("3. FILTER - Switching views...");
    for mode in FilterMode::ALL {
        store.set_filter(mode);
        print_visible(&store);
    }
    store.set_filter(FilterMode::All);

    // EDIT: scratch text is written back on save
    println!("4. EDIT - Renaming 'write report'...");
    store.begin_edit(report);
    store.update_edit_text("write quarterly report");
    store.save_edit();
    println!("   Edit session open: {}", store.edit_session().is_some());
    print_visible(&store);

    // CLEAR: completed tasks go away
    println!("5. CLEAR - Removing completed tasks...");
    let removed = store.clear_completed();
    println!("   Removed {} task(s)", removed);
    print_visible(&store);

    println!("Done.");
    Ok(())
}
