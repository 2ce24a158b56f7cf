// Change events delivered to store subscribers

use crate::filter::FilterMode;
use crate::task::TaskId;
use serde::Serialize;

/// What changed in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    TaskAdded { id: TaskId },
    TaskToggled { id: TaskId, completed: bool },
    TaskDeleted { id: TaskId },
    TaskEdited { id: TaskId },
    CompletedCleared { removed: usize },
    FilterChanged { filter: FilterMode },
    InputChanged,
    EditStarted { id: TaskId },
    EditTextChanged,
    EditCancelled,
    NotificationShown { generation: u64 },
    NotificationDismissed,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Registered observers in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            listeners.add(Box::new(move |event| seen.borrow_mut().push((tag, event.clone()))));
        }

        listeners.emit(&StoreEvent::InputChanged);
        assert_eq!(
            *seen.borrow(),
            vec![("a", StoreEvent::InputChanged), ("b", StoreEvent::InputChanged)]
        );
    }

    #[test]
    fn test_remove_listener() {
        let mut listeners = Listeners::default();
        let id = listeners.add(Box::new(|_| {}));
        assert_eq!(listeners.len(), 1);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_event_serializes_tagged() {
        let json = serde_json::to_value(StoreEvent::TaskAdded { id: 3 }).unwrap();
        assert_eq!(json["event"], "task_added");
        assert_eq!(json["id"], 3);
    }
}
