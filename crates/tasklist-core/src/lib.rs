//! Task Lists Core Domain Types
//!
//! This crate contains the pure model behind the task lists widget with no
//! dependencies on:
//! - The DOM or any rendering layer
//! - wasm-bindgen
//!
//! Every mutation the widget performs on screen is first applied here.

pub mod collection;
pub mod error;
pub mod ids;
pub mod item;
pub mod list;
pub mod notification;
pub mod snapshot;
pub mod text;

// Re-export commonly used types
pub use collection::{Keyed, ListsCollection};
pub use error::CoreError;
pub use ids::{ItemId, ListId};
pub use item::TaskItem;
pub use list::{TaskList, Toggle, DEFAULT_LIST_NAME};
pub use notification::Notification;
pub use snapshot::ListSnapshot;
pub use text::clean_task_name;
