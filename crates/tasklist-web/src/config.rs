//! Widget configuration.

use serde::{Deserialize, Serialize};
use tasklist_core::DEFAULT_LIST_NAME;
use wasm_bindgen::JsValue;

use crate::error::WidgetError;

/// Widget configuration, read from an optional JS object.
///
/// Every field is optional on the JS side; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Name given to lists created by the "add list" control.
    pub default_list_name: String,

    /// Label of the "add list" control.
    pub add_list_label: String,

    /// Filter directive for the console logger, e.g. `"debug"`.
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_list_name: DEFAULT_LIST_NAME.to_string(),
            add_list_label: "New List".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Read a config from JS. `null` and `undefined` yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, WidgetError> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| WidgetError::Config(e.to_string()))
    }
}
