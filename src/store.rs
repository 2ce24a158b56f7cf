// In-memory task list store

use crate::config::Config;
use crate::event::{Listeners, StoreEvent, SubscriptionId};
use crate::filter::FilterMode;
use crate::notification::{Notification, NotificationSlot};
use crate::task::{EditSession, IdAllocator, Task, TaskId};
use serde::Serialize;
use tracing::debug;

type Clock = Box<dyn Fn() -> i64>;

/// Owns the task collection and the transient UI state around it
///
/// Every operation runs to completion and never fails. Unknown ids and empty
/// input are no-ops, reported through the return value. Subscribers receive a
/// [`StoreEvent`] for each change; no-ops emit nothing.
pub struct TaskListStore {
    tasks: Vec<Task>,
    ids: IdAllocator,
    filter: FilterMode,
    input: String,
    edit: Option<EditSession>,
    notification: NotificationSlot,
    config: Config,
    clock: Clock,
    listeners: Listeners,
}

/// Everything a renderer needs, in one serializable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub filter: FilterMode,
    pub visible: Vec<Task>,
    pub input: String,
    pub edit: Option<EditSession>,
    pub notification: Option<String>,
    pub items_left: usize,
}

impl TaskListStore {
    /// Create an empty store with default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, crate::now_ms)
    }

    /// Create a store reading time from `clock` (milliseconds since epoch)
    pub fn with_clock<F>(config: Config, clock: F) -> Self
    where
        F: Fn() -> i64 + 'static,
    {
        Self {
            tasks: Vec::new(),
            ids: IdAllocator::new(),
            filter: FilterMode::default(),
            input: String::new(),
            edit: None,
            notification: NotificationSlot::default(),
            config,
            clock: Box::new(clock),
            listeners: Listeners::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tasks passing the current filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Size of the visible list under the current filter
    ///
    /// This is what the "items left" counter shows, so under `Completed` it
    /// counts completed tasks. Use [`active_count`](Self::active_count) for
    /// the number of uncompleted tasks.
    pub fn items_left(&self) -> usize {
        self.tasks.iter().filter(|t| self.filter.matches(t)).count()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            filter: self.filter,
            visible: self.visible_tasks().into_iter().cloned().collect(),
            input: self.input.clone(),
            edit: self.edit.clone(),
            notification: self.notification().map(|n| n.message.clone()),
            items_left: self.items_left(),
        }
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register an observer called after every state change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(?event, "store event");
        self.listeners.emit(&event);
    }

    fn notify(&mut self, message: String) {
        let now = (self.clock)();
        let generation = self.notification.show(&message, now, self.config.notification_ttl_ms);
        debug!(generation, message = %message, "notification shown");
        self.emit(StoreEvent::NotificationShown { generation });
    }

    // ========================================================================
    // Input buffer
    // ========================================================================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.emit(StoreEvent::InputChanged);
    }

    /// Add the contents of the input buffer
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let text = self.input.clone();
        self.add(&text)
    }

    // ========================================================================
    // Task operations
    // ========================================================================

    /// Append a task with the trimmed text
    ///
    /// Returns `None` without touching any state when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("add: ignoring blank text");
            return None;
        }

        let id = self.ids.allocate();
        self.tasks.push(Task::new(id, text));
        debug!(id, text, "add: task appended");
        self.emit(StoreEvent::TaskAdded { id });

        if !self.input.is_empty() {
            self.input.clear();
            self.emit(StoreEvent::InputChanged);
        }

        let message = self.config.messages.added.clone();
        self.notify(message);
        Some(id)
    }

    /// Flip the completion flag; returns false if the id is unknown
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "toggle_complete: unknown id");
            return false;
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.emit(StoreEvent::TaskToggled { id, completed });
        true
    }

    /// Remove a task; returns whether it existed
    ///
    /// The success notification is shown even when nothing was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;

        if removed {
            self.emit(StoreEvent::TaskDeleted { id });
            if self.edit.as_ref().is_some_and(|e| e.task_id == id) {
                self.edit = None;
                self.emit(StoreEvent::EditCancelled);
            }
        } else {
            debug!(id, "delete: unknown id");
        }

        let message = self.config.messages.deleted.clone();
        self.notify(message);
        removed
    }

    /// Remove every completed task; returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        let removed = before - self.tasks.len();

        if self
            .edit
            .as_ref()
            .is_some_and(|e| !self.tasks.iter().any(|t| t.id == e.task_id))
        {
            self.edit = None;
            self.emit(StoreEvent::EditCancelled);
        }

        debug!(removed, "clear_completed");
        self.emit(StoreEvent::CompletedCleared { removed });
        let message = self.config.messages.cleared.clone();
        self.notify(message);
        removed
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.emit(StoreEvent::FilterChanged { filter });
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Open an edit session on a task, replacing any open one
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.task(id) else {
            debug!(id, "begin_edit: unknown id");
            return false;
        };

        self.edit = Some(EditSession {
            task_id: id,
            text: task.text.clone(),
        });
        self.emit(StoreEvent::EditStarted { id });
        true
    }

    /// Replace the scratch text; false when no session is open
    pub fn update_edit_text(&mut self, text: impl Into<String>) -> bool {
        let Some(edit) = self.edit.as_mut() else {
            return false;
        };

        edit.text = text.into();
        self.emit(StoreEvent::EditTextChanged);
        true
    }

    /// Write the scratch text into the task and close the session
    ///
    /// Unlike `add`, the text is stored verbatim, blank or not. Returns the
    /// edited task id, or `None` when no session was open.
    pub fn save_edit(&mut self) -> Option<TaskId> {
        let edit = self.edit.take()?;

        let id = edit.task_id;
        let saved = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = edit.text;
                true
            }
            None => false,
        };

        if saved {
            self.emit(StoreEvent::TaskEdited { id });
        } else {
            debug!(id, "save_edit: task no longer exists");
        }

        let message = self.config.messages.edited.clone();
        self.notify(message);
        Some(id)
    }

    /// Close the session without saving
    pub fn cancel_edit(&mut self) -> bool {
        if self.edit.take().is_none() {
            return false;
        }
        self.emit(StoreEvent::EditCancelled);
        true
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub fn dismiss_notification(&mut self) -> bool {
        let dismissed = self.notification.dismiss();
        if dismissed {
            self.emit(StoreEvent::NotificationDismissed);
        }
        dismissed
    }

    /// Timer callback: clear the notification only if it is still `generation`
    pub fn expire_notification(&mut self, generation: u64) -> bool {
        let expired = self.notification.expire(generation);
        if expired {
            self.emit(StoreEvent::NotificationDismissed);
        } else {
            debug!(generation, "expire_notification: stale timer ignored");
        }
        expired
    }

    /// Clear the notification if its lifetime has elapsed at `now_ms`
    pub fn tick(&mut self, now_ms: i64) -> bool {
        let expired = self.notification.tick(now_ms);
        if expired {
            self.emit(StoreEvent::NotificationDismissed);
        }
        expired
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("filter", &self.filter)
            .field("input", &self.input)
            .field("edit", &self.edit)
            .field("notification", &self.notification.current())
            .field("listeners", &self.listeners)
            .finish()
    }
}
