// TodoStore - In-memory to-do list state with filtering, editing and notifications

pub mod command;
pub mod config;
pub mod event;
pub mod filter;
pub mod notification;
pub mod store;
pub mod task;
pub mod view;

// Re-export main types for convenience
pub use command::{Command, Dispatched};
pub use config::{Config, Messages};
pub use event::{StoreEvent, SubscriptionId};
pub use filter::FilterMode;
pub use notification::Notification;
pub use store::{Snapshot, TaskListStore};
pub use task::{EditSession, Task, TaskId};

// Helper function for timestamps
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
