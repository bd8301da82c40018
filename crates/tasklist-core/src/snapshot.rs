//! Plain data representation of a list.

use crate::{CoreError, ListId, TaskItem};
use serde::{Deserialize, Serialize};

/// A list's id, name and items, independent of any rendered representation.
///
/// This is the shape consumed when hydrating a list and produced when a list
/// is inspected from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    /// List identifier.
    pub id: ListId,

    /// List display name.
    pub name: String,

    /// Items in display order.
    #[serde(default)]
    pub items: Vec<TaskItem>,
}

impl ListSnapshot {
    /// Create a snapshot with the given id and name and no items.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Builder method to append an item.
    pub fn with_item(mut self, item: TaskItem) -> Self {
        self.items.push(item);
        self
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
