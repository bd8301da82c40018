//! Shared fixtures for the browser tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tasklist_web::dom::Listener;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, Element, Event, HtmlElement};

static NEXT_ROOT: AtomicUsize = AtomicUsize::new(0);

/// A fresh `<div id="root-N">` appended to the body, and its selector.
pub fn mount_root() -> (Element, String) {
    let doc = tasklist_web::dom::document().unwrap();
    let id = format!("root-{}", NEXT_ROOT.fetch_add(1, Ordering::Relaxed));
    let root = doc.create_element("div").unwrap();
    root.set_id(&id);
    doc.body().unwrap().append_child(&root).unwrap();
    (root, format!("#{}", id))
}

/// Records the `detail` of every event of one type reaching `target`.
pub struct Recorder {
    pub details: Rc<RefCell<Vec<JsValue>>>,
    _listener: Listener,
}

impl Recorder {
    pub fn on(target: &Element, event: &'static str) -> Self {
        let details = Rc::new(RefCell::new(Vec::new()));
        let sink = details.clone();
        let listener = Listener::new(target, event, move |event: Event| {
            let detail = event
                .dyn_ref::<CustomEvent>()
                .map(CustomEvent::detail)
                .unwrap_or(JsValue::UNDEFINED);
            sink.borrow_mut().push(detail);
        })
        .unwrap();
        Self {
            details,
            _listener: listener,
        }
    }

    pub fn count(&self) -> usize {
        self.details.borrow().len()
    }

    /// A string field of the n-th recorded detail.
    pub fn field(&self, index: usize, key: &str) -> Option<String> {
        let details = self.details.borrow();
        let detail = details.get(index)?;
        js_sys::Reflect::get(detail, &JsValue::from_str(key))
            .ok()?
            .as_string()
    }
}

pub fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

pub fn child_count(el: &Element) -> u32 {
    el.children().length()
}
