//! Task item type.

use crate::ItemId;
use serde::{Deserialize, Serialize};

/// A single entry in a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique item identifier.
    pub id: ItemId,

    /// Display name of the task.
    pub name: String,

    /// Whether the task has been completed.
    #[serde(default)]
    pub done: bool,
}

impl TaskItem {
    /// Create a new, not yet done, TaskItem with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            done: false,
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// Builder method to set the done flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}
