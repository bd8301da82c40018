//! Thin helpers over `web-sys` for building markup and dispatching notifications.

use tasklist_core::Notification;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, Event, EventTarget};

use crate::error::WidgetError;

/// The current window's document.
pub fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .ok_or(WidgetError::NoWindow)?
        .document()
        .ok_or(WidgetError::NoDocument)
}

/// Create an element, optionally with text content.
pub fn element(doc: &Document, tag: &str, text: Option<&str>) -> Result<Element, WidgetError> {
    let el = doc.create_element(tag).map_err(WidgetError::dom)?;
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), WidgetError> {
    el.set_attribute(name, value).map_err(WidgetError::dom)
}

/// Append children in order.
pub fn append_all(parent: &Element, children: &[&Element]) -> Result<(), WidgetError> {
    for child in children {
        parent.append_child(child).map_err(WidgetError::dom)?;
    }
    Ok(())
}

/// Dispatch a notification as a bubbling, cancelable `CustomEvent`.
///
/// Listeners run before this returns. Returns `false` if a listener called
/// `preventDefault`.
pub fn dispatch(target: &EventTarget, notification: &Notification) -> Result<bool, WidgetError> {
    let detail = serde_wasm_bindgen::to_value(&notification.detail())
        .map_err(|e| WidgetError::Dom(e.to_string()))?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(&detail);

    let event = CustomEvent::new_with_event_init_dict(notification.event_name(), &init)
        .map_err(WidgetError::dom)?;
    target.dispatch_event(&event).map_err(WidgetError::dom)
}

/// An event listener that stays registered for as long as this value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, WidgetError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(WidgetError::dom)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
