// Task model

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within one store
pub type TaskId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// True when the task is not completed yet
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Scratch state of an in-progress edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    pub task_id: TaskId,
    pub text: String,
}

/// Hands out task ids; never returns the same id twice
#[derive(Debug)]
pub(crate) struct IdAllocator {
    next: TaskId,
}

impl IdAllocator {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn allocate(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}
