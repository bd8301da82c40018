//! Lifecycle notifications a rendered list emits to its ancestors.

use crate::{ItemId, ListId, TaskItem};
use serde::Serialize;

/// A state change announced by a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The list removed its rendered subtree.
    ListDestroyed { list_id: ListId },
    /// An item was appended.
    TaskCreated { list_id: ListId, item: TaskItem },
    /// An item's done flag was set.
    TaskToggled {
        list_id: ListId,
        item_id: ItemId,
        done: bool,
    },
    /// An item was removed.
    TaskRemoved { list_id: ListId, item_id: ItemId },
}

/// Payload attached to a dispatched notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetail<'a> {
    pub list_id: &'a ListId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<&'a ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<&'a TaskItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl Notification {
    pub const LIST_DESTROYED: &'static str = "list-destroyed";
    pub const TASK_CREATED: &'static str = "task-created";
    pub const TASK_TOGGLED: &'static str = "task-toggled";
    pub const TASK_REMOVED: &'static str = "task-removed";

    /// Name of the DOM event carrying this notification.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::ListDestroyed { .. } => Self::LIST_DESTROYED,
            Self::TaskCreated { .. } => Self::TASK_CREATED,
            Self::TaskToggled { .. } => Self::TASK_TOGGLED,
            Self::TaskRemoved { .. } => Self::TASK_REMOVED,
        }
    }

    pub fn list_id(&self) -> &ListId {
        match self {
            Self::ListDestroyed { list_id }
            | Self::TaskCreated { list_id, .. }
            | Self::TaskToggled { list_id, .. }
            | Self::TaskRemoved { list_id, .. } => list_id,
        }
    }

    /// Serializable payload for the event's `detail`.
    pub fn detail(&self) -> NotificationDetail<'_> {
        let mut detail = NotificationDetail {
            list_id: self.list_id(),
            item_id: None,
            item: None,
            done: None,
        };
        match self {
            Self::ListDestroyed { .. } => {}
            Self::TaskCreated { item, .. } => detail.item = Some(item),
            Self::TaskToggled { item_id, done, .. } => {
                detail.item_id = Some(item_id);
                detail.done = Some(*done);
            }
            Self::TaskRemoved { item_id, .. } => detail.item_id = Some(item_id),
        }
        detail
    }
}
