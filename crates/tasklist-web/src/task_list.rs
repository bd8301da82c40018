//! A task list rendered into the DOM.
//!
//! Every mutator updates the [`TaskList`] model first and then, while the list
//! is attached to a container, patches the markup and dispatches a
//! notification in the same call. A detached list renders its initial items
//! once and is otherwise a plain in-memory model.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tasklist_core::{
    clean_task_name, ItemId, Keyed, ListId, ListSnapshot, Notification, TaskItem, TaskList,
    Toggle,
};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement};

use crate::config::WidgetConfig;
use crate::dom::{self, Listener};
use crate::error::WidgetError;

/// Toggle marker for an open task (omicron).
pub const OPEN_MARKER: &str = "\u{03bf}";
/// Toggle marker for a finished task (multiplication sign).
pub const DONE_MARKER: &str = "\u{00d7}";
const REMOVE_LABEL: &str = "\u{00d7}";

fn marker_for(done: bool) -> &'static str {
    if done {
        DONE_MARKER
    } else {
        OPEN_MARKER
    }
}

/// Rendered `<li>` for one item, plus the listeners wired to its controls.
struct Row {
    id: ItemId,
    node: Element,
    marker: Element,
    _listeners: [Listener; 2],
}

struct State {
    model: TaskList,
    doc: Document,
    root: Element,
    title: Element,
    list: Element,
    rows: Vec<Row>,
    container: Option<Element>,
    destroyed: bool,
    _controls: Vec<Listener>,
}

/// A task list bound to its own `<article>` subtree.
///
/// Cloning yields another handle to the same list.
#[wasm_bindgen(js_name = TaskList)]
#[derive(Clone)]
pub struct TaskListView {
    id: ListId,
    state: Rc<RefCell<State>>,
}

impl TaskListView {
    /// Build a list, fresh or hydrated from `snapshot`, and append it to
    /// `container` if one is given.
    pub fn new(
        container: Option<&Element>,
        snapshot: Option<ListSnapshot>,
        config: &WidgetConfig,
    ) -> Result<Self, WidgetError> {
        let model = match snapshot {
            Some(snapshot) => TaskList::from_snapshot(snapshot),
            None => TaskList::named(config.default_list_name.as_str()),
        };
        let doc = dom::document()?;

        let root = dom::element(&doc, "article", None)?;
        dom::set_attr(&root, "data-test-id", "task-list")?;
        dom::set_attr(&root, "data-id", model.id().as_str())?;

        let header = dom::element(&doc, "header", None)?;
        let title = dom::element(&doc, "h5", Some(model.name()))?;
        let remover = dom::element(&doc, "button", Some(REMOVE_LABEL))?;
        remover.set_class_name("list-remover");
        dom::append_all(&header, &[&title, &remover])?;

        let list = dom::element(&doc, "ul", None)?;

        let form = dom::element(&doc, "form", None)?;
        let input = dom::element(&doc, "input", None)?;
        dom::set_attr(&input, "name", "task")?;
        dom::set_attr(&input, "type", "text")?;
        let submit = dom::element(&doc, "input", None)?;
        dom::set_attr(&submit, "type", "submit")?;
        dom::set_attr(&submit, "value", "add")?;
        submit.set_class_name("add");
        dom::append_all(&form, &[&input, &submit])?;

        dom::append_all(&root, &[&header, &list, &form])?;

        let items = model.items().to_vec();
        let view = Self {
            id: model.id().clone(),
            state: Rc::new(RefCell::new(State {
                model,
                doc,
                root: root.clone(),
                title,
                list,
                rows: Vec::new(),
                container: None,
                destroyed: false,
                _controls: Vec::new(),
            })),
        };

        let controls = view.wire_controls(&remover, &form, &input)?;
        view.state.borrow_mut()._controls = controls;

        for item in &items {
            view.append_row(item)?;
        }

        if let Some(container) = container {
            container.append_child(&root).map_err(WidgetError::dom)?;
            view.state.borrow_mut().container = Some(container.clone());
        }

        debug!(
            list_id = %view.id,
            items = items.len(),
            attached = container.is_some(),
            "task list created"
        );
        Ok(view)
    }

    /// Identifier of the list, also rendered as the article's `data-id`.
    pub fn id(&self) -> &ListId {
        &self.id
    }

    /// Current list name.
    pub fn name(&self) -> String {
        self.state.borrow().model.name().to_string()
    }

    /// Copy of the items in display order.
    pub fn items(&self) -> Vec<TaskItem> {
        self.state.borrow().model.items().to_vec()
    }

    /// Copy of one item, if present.
    pub fn item(&self, id: &ItemId) -> Option<TaskItem> {
        self.state.borrow().model.find(id).cloned()
    }

    /// Number of items not yet done.
    pub fn remaining(&self) -> usize {
        self.state.borrow().model.remaining()
    }

    /// Plain data copy of the list.
    pub fn snapshot(&self) -> ListSnapshot {
        self.state.borrow().model.snapshot()
    }

    /// The list's `<article>` element.
    pub fn node(&self) -> Element {
        self.state.borrow().root.clone()
    }

    /// Whether the subtree currently lives in a container.
    pub fn is_attached(&self) -> bool {
        self.state.borrow().container.is_some()
    }

    /// Whether `destroy` has run.
    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    /// Whether both handles point at the same list instance.
    pub fn same_list(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Whether `target` is this list's `<article>`.
    pub fn is_node(&self, target: &EventTarget) -> bool {
        let state = self.state.borrow();
        let root: &JsValue = state.root.as_ref();
        let target: &JsValue = target.as_ref();
        root == target
    }

    /// Append a task. While attached, also append its row and dispatch
    /// `task-created` from it.
    pub fn add(&self, name: &str) -> Result<TaskItem, WidgetError> {
        let item = self.state.borrow_mut().model.add(name);
        debug!(list_id = %self.id, item_id = %item.id, "task added");

        if self.is_attached() {
            let node = self.append_row(&item)?;
            dom::dispatch(
                &node,
                &Notification::TaskCreated {
                    list_id: self.id.clone(),
                    item: item.clone(),
                },
            )?;
        }
        Ok(item)
    }

    /// Apply `toggle` to an item. Absent ids are ignored and yield `None`.
    ///
    /// While attached, the row's `data-done` and marker follow and
    /// `task-toggled` is dispatched from the row.
    pub fn toggle(&self, id: &ItemId, toggle: Toggle) -> Result<Option<bool>, WidgetError> {
        let (done, row) = {
            let mut state = self.state.borrow_mut();
            let Some(done) = state.model.toggle(id, toggle) else {
                return Ok(None);
            };
            let row = match state.container {
                Some(_) => state
                    .rows
                    .iter()
                    .find(|row| &row.id == id)
                    .map(|row| (row.node.clone(), row.marker.clone())),
                None => None,
            };
            (done, row)
        };
        debug!(list_id = %self.id, item_id = %id, done, "task toggled");

        if let Some((node, marker)) = row {
            dom::set_attr(&node, "data-done", if done { "true" } else { "false" })?;
            marker.set_text_content(Some(marker_for(done)));
            dom::dispatch(
                &node,
                &Notification::TaskToggled {
                    list_id: self.id.clone(),
                    item_id: id.clone(),
                    done,
                },
            )?;
        }
        Ok(Some(done))
    }

    /// Remove an item. Absent ids are ignored and yield `false`.
    ///
    /// While attached, `task-removed` is dispatched from the row before the
    /// row leaves the tree.
    pub fn remove(&self, id: &ItemId) -> Result<bool, WidgetError> {
        let row = {
            let mut state = self.state.borrow_mut();
            if state.model.remove(id).is_none() {
                return Ok(false);
            }
            match state.container {
                Some(_) => {
                    let index = state.rows.iter().position(|row| &row.id == id);
                    index.map(|index| state.rows.remove(index))
                }
                None => None,
            }
        };
        debug!(list_id = %self.id, item_id = %id, "task removed");

        if let Some(row) = row {
            let notified = dom::dispatch(
                &row.node,
                &Notification::TaskRemoved {
                    list_id: self.id.clone(),
                    item_id: id.clone(),
                },
            );
            row.node.remove();
            notified?;
        }
        Ok(true)
    }

    /// Dispatch `list-destroyed` from the list's root, then remove the
    /// subtree. Items stay in memory; later calls are no-ops.
    pub fn destroy(&self) -> Result<(), WidgetError> {
        let root = {
            let mut state = self.state.borrow_mut();
            if state.destroyed {
                return Ok(());
            }
            state.destroyed = true;
            state.root.clone()
        };

        let notified = dom::dispatch(
            &root,
            &Notification::ListDestroyed {
                list_id: self.id.clone(),
            },
        );
        root.remove();
        self.state.borrow_mut().container = None;
        debug!(list_id = %self.id, "task list destroyed");

        notified.map(|_| ())
    }

    /// Rename the list and update its header.
    pub fn rename(&self, name: &str) -> Result<String, WidgetError> {
        let mut state = self.state.borrow_mut();
        let name = state.model.rename(name)?.to_string();
        state.title.set_text_content(Some(&name));
        Ok(name)
    }

    fn upgrade(state: &Weak<RefCell<State>>, id: &ListId) -> Option<Self> {
        state.upgrade().map(|state| Self {
            id: id.clone(),
            state,
        })
    }

    fn wire_controls(
        &self,
        remover: &Element,
        form: &Element,
        input: &Element,
    ) -> Result<Vec<Listener>, WidgetError> {
        let weak = Rc::downgrade(&self.state);
        let id = self.id.clone();
        let on_destroy = Listener::new(remover, "click", move |_| {
            if let Some(view) = Self::upgrade(&weak, &id) {
                if let Err(err) = view.destroy() {
                    warn!(list_id = %id, %err, "failed to destroy list");
                }
            }
        })?;

        let form_el: HtmlFormElement = form
            .clone()
            .dyn_into()
            .map_err(|_| WidgetError::Dom("expected a form element".to_string()))?;
        let input_el: HtmlInputElement = input
            .clone()
            .dyn_into()
            .map_err(|_| WidgetError::Dom("expected an input element".to_string()))?;
        let weak = Rc::downgrade(&self.state);
        let id = self.id.clone();
        let on_submit = Listener::new(form, "submit", move |event: Event| {
            event.prevent_default();
            let Some(view) = Self::upgrade(&weak, &id) else {
                return;
            };
            let Some(name) = clean_task_name(&input_el.value()) else {
                return;
            };
            match view.add(&name) {
                Ok(_) => form_el.reset(),
                Err(err) => warn!(list_id = %id, %err, "failed to add task"),
            }
        })?;

        Ok(vec![on_destroy, on_submit])
    }

    fn append_row(&self, item: &TaskItem) -> Result<Element, WidgetError> {
        let (doc, list) = {
            let state = self.state.borrow();
            (state.doc.clone(), state.list.clone())
        };

        let node = dom::element(&doc, "li", None)?;
        dom::set_attr(&node, "data-id", item.id.as_str())?;
        dom::set_attr(&node, "data-done", if item.done { "true" } else { "false" })?;

        let marker = dom::element(&doc, "span", Some(marker_for(item.done)))?;
        marker.set_class_name("toggler");
        let name = dom::element(&doc, "h6", Some(&item.name))?;
        let remover = dom::element(&doc, "button", Some(REMOVE_LABEL))?;
        remover.set_class_name("task-remover");
        dom::append_all(&node, &[&marker, &name, &remover])?;

        let weak = Rc::downgrade(&self.state);
        let list_id = self.id.clone();
        let item_id = item.id.clone();
        let on_toggle = Listener::new(&marker, "click", move |_| {
            if let Some(view) = Self::upgrade(&weak, &list_id) {
                if let Err(err) = view.toggle(&item_id, Toggle::Flip) {
                    warn!(list_id = %list_id, item_id = %item_id, %err, "failed to toggle task");
                }
            }
        })?;

        let weak = Rc::downgrade(&self.state);
        let list_id = self.id.clone();
        let item_id = item.id.clone();
        let on_remove = Listener::new(&remover, "click", move |_| {
            if let Some(view) = Self::upgrade(&weak, &list_id) {
                if let Err(err) = view.remove(&item_id) {
                    warn!(list_id = %list_id, item_id = %item_id, %err, "failed to remove task");
                }
            }
        })?;

        list.append_child(&node).map_err(WidgetError::dom)?;
        self.state.borrow_mut().rows.push(Row {
            id: item.id.clone(),
            node: node.clone(),
            marker,
            _listeners: [on_toggle, on_remove],
        });
        Ok(node)
    }
}

impl Keyed for TaskListView {
    fn list_id(&self) -> &ListId {
        &self.id
    }
}

/// Read an optional snapshot handed over from JS, either as a plain object or
/// as JSON text.
pub(crate) fn snapshot_from_js(value: JsValue) -> Result<Option<ListSnapshot>, WidgetError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    if let Some(json) = value.as_string() {
        return ListSnapshot::from_json(&json)
            .map(Some)
            .map_err(|e| WidgetError::Snapshot(e.to_string()));
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| WidgetError::Snapshot(e.to_string()))
}

pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

#[wasm_bindgen(js_class = TaskList)]
impl TaskListView {
    /// `new TaskList(container?, snapshot?)`
    #[wasm_bindgen(constructor)]
    pub fn js_new(container: Option<Element>, snapshot: JsValue) -> Result<TaskListView, JsValue> {
        let snapshot = snapshot_from_js(snapshot)?;
        Ok(Self::new(
            container.as_ref(),
            snapshot,
            &WidgetConfig::default(),
        )?)
    }

    #[wasm_bindgen(getter, js_name = id)]
    pub fn js_id(&self) -> String {
        self.id.to_string()
    }

    #[wasm_bindgen(getter, js_name = name)]
    pub fn js_list_name(&self) -> String {
        self.name()
    }

    #[wasm_bindgen(getter, js_name = items)]
    pub fn js_items(&self) -> Result<JsValue, JsValue> {
        to_js(&self.items())
    }

    #[wasm_bindgen(getter, js_name = remaining)]
    pub fn js_remaining(&self) -> usize {
        self.remaining()
    }

    #[wasm_bindgen(getter, js_name = rawData)]
    pub fn js_raw_data(&self) -> Result<JsValue, JsValue> {
        to_js(&self.snapshot())
    }

    #[wasm_bindgen(getter, js_name = node)]
    pub fn js_node(&self) -> Element {
        self.node()
    }

    #[wasm_bindgen(js_name = add)]
    pub fn js_add(&self, name: &str) -> Result<JsValue, JsValue> {
        let item = self.add(name)?;
        to_js(&item)
    }

    /// `toggle(id, desired?)`: flips when `desired` is omitted.
    #[wasm_bindgen(js_name = toggle)]
    pub fn js_toggle(&self, id: &str, desired: Option<bool>) -> Result<Option<bool>, JsValue> {
        Ok(self.toggle(&ItemId::from(id), Toggle::from(desired))?)
    }

    #[wasm_bindgen(js_name = remove)]
    pub fn js_remove(&self, id: &str) -> Result<bool, JsValue> {
        Ok(self.remove(&ItemId::from(id))?)
    }

    #[wasm_bindgen(js_name = destroy)]
    pub fn js_destroy(&self) -> Result<(), JsValue> {
        Ok(self.destroy()?)
    }

    #[wasm_bindgen(js_name = rename)]
    pub fn js_rename(&self, name: &str) -> Result<String, JsValue> {
        Ok(self.rename(name)?)
    }
}
