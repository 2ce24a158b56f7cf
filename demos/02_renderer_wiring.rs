//! Example 02: Renderer Wiring
//!
//! This example shows how a rendering layer hooks into the store:
//! - subscribe to `StoreEvent`s and re-render on change
//! - start an auto-dismiss timer for each shown notification
//! - deliver the timer back through `expire_notification(generation)`
//!
//! A notification dismissed by hand leaves its timer running. When that
//! timer fires later it carries the old generation, so it cannot clear the
//! newer notification shown in the meantime.
//!
//! Run with: cargo run --example 02_renderer_wiring

use eyre::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use todostore::{Config, StoreEvent, TaskListStore, view};

/// Sleep for the notification's lifetime, then report its generation
fn start_timer(tx: &mpsc::Sender<u64>, generation: u64, lifetime_ms: u64) {
    let tx = tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(lifetime_ms));
        let _ = tx.send(generation);
    });
}

/// Start a timer for every notification shown since the last call
fn schedule_timers(store: &TaskListStore, shown: &RefCell<Vec<u64>>, tx: &mpsc::Sender<u64>) {
    for generation in shown.borrow_mut().drain(..) {
        if let Some(n) = store.notification().filter(|n| n.generation == generation) {
            println!("   timer started for generation {} ({} ms)", generation, n.lifetime_ms());
            start_timer(tx, generation, n.lifetime_ms());
        }
    }
}

fn main() -> Result<()> {
    colored::control::set_override(false);

    println!("TodoStore Renderer Wiring Example");
    println!("=================================\n");

    let mut config = Config::default();
    config.notification_ttl_ms = 300;
    let mut store = TaskListStore::with_config(config);

    // The renderer only learns about changes through events
    let dirty = Rc::new(RefCell::new(false));
    let shown = Rc::new(RefCell::new(Vec::new()));
    {
        let dirty = Rc::clone(&dirty);
        let shown = Rc::clone(&shown);
        store.subscribe(move |event| {
            println!("   event: {}", serde_json::to_string(event).unwrap_or_default());
            if let StoreEvent::NotificationShown { generation } = event {
                shown.borrow_mut().push(*generation);
            }
            *dirty.borrow_mut() = true;
        });
    }

    let (tx, rx) = mpsc::channel::<u64>();

    let render_if_dirty = |store: &TaskListStore| {
        if dirty.replace(false) {
            print!("{}", view::render(store));
        }
    };

    println!("1. Add a task, then dismiss its notification by hand...");
    store.add("buy milk");
    schedule_timers(&store, &shown, &tx);
    store.dismiss_notification();
    render_if_dirty(&store);

    thread::sleep(Duration::from_millis(150));

    println!("\n2. Add another task while the first timer is still pending...");
    store.add("walk dog");
    schedule_timers(&store, &shown, &tx);
    render_if_dirty(&store);

    println!("\n3. Deliver timers as they fire...");
    for _ in 0..2 {
        let generation = rx
            .recv_timeout(Duration::from_secs(2))
            .map_err(|e| eyre::eyre!("Timer did not fire: {}", e))?;
        let cleared = store.expire_notification(generation);
        println!(
            "   timer for generation {} fired: {}",
            generation,
            if cleared { "notification cleared" } else { "stale, ignored" }
        );
        render_if_dirty(&store);
    }

    println!("\nDone.");
    Ok(())
}
