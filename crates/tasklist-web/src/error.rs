//! Error types for the DOM layer.

use tasklist_core::CoreError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while building or mutating the widget's markup.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Not running inside a browser window.
    #[error("No global window available")]
    NoWindow,

    /// The window has no document attached.
    #[error("Window has no document")]
    NoDocument,

    /// Root selector did not match any element.
    #[error("No element matches selector '{0}'")]
    RootNotFound(String),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Snapshot passed from JS could not be read.
    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    /// Config object passed from JS could not be read.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Model-level error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl WidgetError {
    /// Wrap a value thrown by a DOM call.
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
