//! In-memory task list model.

use crate::{clean_task_name, CoreError, ItemId, ListId, ListSnapshot, TaskItem};

/// Name given to lists created from scratch.
pub const DEFAULT_LIST_NAME: &str = "New list";

/// How a toggle changes an item's done flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Toggle {
    /// Invert the current value.
    #[default]
    Flip,
    /// Set the value regardless of its current state.
    SetTo(bool),
}

impl Toggle {
    /// Resolve the new done flag from the current one.
    pub fn apply(self, current: bool) -> bool {
        match self {
            Self::Flip => !current,
            Self::SetTo(value) => value,
        }
    }
}

impl From<Option<bool>> for Toggle {
    fn from(desired: Option<bool>) -> Self {
        desired.map_or(Self::Flip, Self::SetTo)
    }
}

/// A named, ordered collection of task items.
///
/// Item order is insertion order and is the order the items are displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    id: ListId,
    name: String,
    items: Vec<TaskItem>,
}

impl TaskList {
    /// Create an empty list with a fresh id and the default name.
    pub fn new() -> Self {
        Self::named(DEFAULT_LIST_NAME)
    }

    /// Create an empty list with a fresh id and the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ListId::generate(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Hydrate a list, adopting the snapshot's id, name and items verbatim.
    pub fn from_snapshot(snapshot: ListSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            items: snapshot.items,
        }
    }

    /// List identifier.
    pub fn id(&self) -> &ListId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in display order.
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet done.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Find an item by id.
    pub fn find(&self, id: &ItemId) -> Option<&TaskItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Plain data copy of the list.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            items: self.items.clone(),
        }
    }

    /// Append a new, not done item and return a copy of it.
    pub fn add(&mut self, name: impl Into<String>) -> TaskItem {
        let item = TaskItem::new(name);
        self.items.push(item.clone());
        item
    }

    /// Apply a toggle to the item with the given id.
    ///
    /// Returns the item's new done flag, or `None` if no such item exists.
    pub fn toggle(&mut self, id: &ItemId, toggle: Toggle) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.done = toggle.apply(item.done);
        Some(item.done)
    }

    /// Remove the item with the given id.
    ///
    /// Returns the former index and the removed item, or `None` if absent.
    pub fn remove(&mut self, id: &ItemId) -> Option<(usize, TaskItem)> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some((index, self.items.remove(index)))
    }

    /// Rename the list. The name is cleaned the same way task names are.
    pub fn rename(&mut self, name: &str) -> Result<&str, CoreError> {
        let cleaned = clean_task_name(name)
            .ok_or_else(|| CoreError::InvalidInput("list name must not be blank".to_string()))?;
        self.name = cleaned;
        Ok(&self.name)
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ListSnapshot> for TaskList {
    fn from(snapshot: ListSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}
