//! Task lists widget for the browser.
//!
//! A [`ListsHolderView`] (exported to JS as `ListsHolder`) mounts a section of
//! task lists and an "add list" button on a root element. Each
//! [`TaskListView`] (exported as `TaskList`) renders its own `<article>` and
//! keeps it in step with the [`tasklist_core::TaskList`] model.
//!
//! Lists announce changes with bubbling `CustomEvent`s named after
//! [`tasklist_core::Notification`] variants.

pub mod config;
pub mod dom;
pub mod error;
pub mod lists_holder;
pub mod logging;
pub mod task_list;

use wasm_bindgen::prelude::*;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use lists_holder::ListsHolderView;
pub use task_list::{TaskListView, DONE_MARKER, OPEN_MARKER};

/// Install console logging and the panic hook. `level` defaults to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    logging::init(level.as_deref().unwrap_or("info"));
}
