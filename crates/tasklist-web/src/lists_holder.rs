//! The root widget: a section of task lists plus an "add list" control.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use tasklist_core::{ListId, ListSnapshot, ListsCollection, Notification};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, Element, Event};

use crate::config::WidgetConfig;
use crate::dom::{self, Listener};
use crate::error::WidgetError;
use crate::logging;
use crate::task_list::{snapshot_from_js, to_js, TaskListView};

struct State {
    root: Element,
    section: Element,
    config: WidgetConfig,
    /// Lists reported by `collection`.
    lists: ListsCollection<TaskListView>,
    /// Every mounted list that has not been destroyed. Holds the strong
    /// handles, so a list dropped from `lists` keeps working.
    views: Vec<TaskListView>,
    _listeners: Vec<Listener>,
}

/// Owns every task list mounted under one root element.
#[wasm_bindgen(js_name = ListsHolder)]
pub struct ListsHolderView {
    state: Rc<RefCell<State>>,
}

/// The part of a `list-destroyed` detail the holder needs.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DestroyedDetail {
    list_id: ListId,
}

impl ListsHolderView {
    /// Mount on the first element matching `selector`.
    pub fn new(selector: &str, config: WidgetConfig) -> Result<Self, WidgetError> {
        let doc = dom::document()?;
        let root = doc
            .query_selector(selector)
            .map_err(WidgetError::dom)?
            .ok_or_else(|| WidgetError::RootNotFound(selector.to_string()))?;

        let section = dom::element(&doc, "section", None)?;
        section.set_class_name("lists-holder");
        dom::set_attr(&section, "data-testid", "list-node")?;

        let adder = dom::element(&doc, "button", Some(&config.add_list_label))?;
        dom::set_attr(&adder, "data-testid", "list-adder")?;

        dom::append_all(&root, &[&section, &adder])?;

        let holder = Self {
            state: Rc::new(RefCell::new(State {
                root,
                section: section.clone(),
                config,
                lists: ListsCollection::new(),
                views: Vec::new(),
                _listeners: Vec::new(),
            })),
        };

        let weak = Rc::downgrade(&holder.state);
        let on_add = Listener::new(&adder, "click", move |_| {
            if let Some(state) = weak.upgrade() {
                if let Err(err) = (Self { state }).add_list() {
                    warn!(%err, "failed to add list");
                }
            }
        })?;

        let weak = Rc::downgrade(&holder.state);
        let on_destroyed = Listener::new(&section, Notification::LIST_DESTROYED, move |event| {
            let Some(holder) = weak.upgrade() else {
                return;
            };
            let Ok(mut state) = holder.try_borrow_mut() else {
                warn!("holder busy, destroyed list left in collection");
                return;
            };
            match prune_destroyed(&mut state, &event) {
                Some(id) => debug!(list_id = %id, "list removed from holder"),
                None => warn!("list-destroyed notification for an unknown list"),
            }
        })?;

        holder.state.borrow_mut()._listeners = vec![on_add, on_destroyed];
        debug!(selector, "lists holder mounted");
        Ok(holder)
    }

    /// Create a fresh list inside the section and record it.
    pub fn add_list(&self) -> Result<ListSnapshot, WidgetError> {
        self.mount_list(None)
    }

    /// Hydrate a list from a snapshot inside the section and record it.
    pub fn add_list_from(&self, snapshot: ListSnapshot) -> Result<ListSnapshot, WidgetError> {
        self.mount_list(Some(snapshot))
    }

    /// Drop the first list with `id` from the collection. Absent ids are
    /// ignored.
    ///
    /// The list stays mounted and keeps reacting to its controls. Destroyed
    /// lists are dropped automatically.
    pub fn remove_list(&self, id: &ListId) -> bool {
        let removed = self.state.borrow_mut().lists.remove(id);
        if removed.is_some() {
            debug!(list_id = %id, "list dropped from collection");
        }
        removed.is_some()
    }

    /// Current snapshots of the live lists, in display order.
    pub fn collection(&self) -> Vec<ListSnapshot> {
        self.state
            .borrow()
            .lists
            .iter()
            .map(TaskListView::snapshot)
            .collect()
    }

    /// Handle to the first collected list with `id`.
    pub fn list(&self, id: &ListId) -> Option<TaskListView> {
        self.state.borrow().lists.get(id).cloned()
    }

    /// Number of lists in the collection.
    pub fn len(&self) -> usize {
        self.state.borrow().lists.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().lists.is_empty()
    }

    /// The element the holder was mounted on.
    pub fn parent_node(&self) -> Element {
        self.state.borrow().root.clone()
    }

    /// The section holding the lists.
    pub fn list_node(&self) -> Element {
        self.state.borrow().section.clone()
    }

    fn mount_list(&self, snapshot: Option<ListSnapshot>) -> Result<ListSnapshot, WidgetError> {
        let (section, config) = {
            let state = self.state.borrow();
            (state.section.clone(), state.config.clone())
        };

        let list = TaskListView::new(Some(&section), snapshot, &config)?;
        let snapshot = list.snapshot();
        {
            let mut state = self.state.borrow_mut();
            state.views.push(list.clone());
            state.lists.push(list);
        }

        debug!(list_id = %snapshot.id, "list added to holder");
        Ok(snapshot)
    }
}

/// Forget the list a `list-destroyed` event came from.
///
/// The list is matched by the element that dispatched the event, so lists
/// sharing an id are told apart. Events from elements the holder did not
/// mount fall back to the id carried by the event.
fn prune_destroyed(state: &mut State, event: &Event) -> Option<ListId> {
    let view = event.target().and_then(|target| {
        let index = state.views.iter().position(|view| view.is_node(&target))?;
        Some(state.views.remove(index))
    });

    match view {
        Some(view) => {
            state.lists.remove_where(|list| list.same_list(&view));
            Some(view.id().clone())
        }
        None => {
            let id = destroyed_list_id(event)?;
            let removed = state.lists.remove(&id)?;
            state.views.retain(|view| !view.same_list(&removed));
            Some(id)
        }
    }
}

/// Read the destroyed list's id from the event detail, falling back to the
/// `data-id` of the element that dispatched it.
fn destroyed_list_id(event: &Event) -> Option<ListId> {
    let from_detail = event
        .dyn_ref::<CustomEvent>()
        .and_then(|event| serde_wasm_bindgen::from_value::<DestroyedDetail>(event.detail()).ok())
        .map(|detail| detail.list_id);

    from_detail.or_else(|| {
        event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.get_attribute("data-id"))
            .map(ListId::from)
    })
}

#[wasm_bindgen(js_class = ListsHolder)]
impl ListsHolderView {
    /// `new ListsHolder(selector, config?)`
    #[wasm_bindgen(constructor)]
    pub fn js_new(selector: &str, config: JsValue) -> Result<ListsHolderView, JsValue> {
        let config = WidgetConfig::from_js(config)?;
        logging::init(&config.log_level);
        Ok(Self::new(selector, config)?)
    }

    #[wasm_bindgen(getter, js_name = collection)]
    pub fn js_collection(&self) -> Result<JsValue, JsValue> {
        to_js(&self.collection())
    }

    #[wasm_bindgen(getter, js_name = parentNode)]
    pub fn js_parent_node(&self) -> Element {
        self.parent_node()
    }

    #[wasm_bindgen(getter, js_name = listNode)]
    pub fn js_list_node(&self) -> Element {
        self.list_node()
    }

    #[wasm_bindgen(getter, js_name = length)]
    pub fn js_len(&self) -> usize {
        self.len()
    }

    #[wasm_bindgen(js_name = addList)]
    pub fn js_add_list(&self, snapshot: JsValue) -> Result<JsValue, JsValue> {
        let snapshot = match snapshot_from_js(snapshot)? {
            Some(snapshot) => self.add_list_from(snapshot)?,
            None => self.add_list()?,
        };
        to_js(&snapshot)
    }

    #[wasm_bindgen(js_name = deleteFromCollection)]
    pub fn js_delete_from_collection(&self, id: &str) -> bool {
        self.remove_list(&ListId::from(id))
    }
}
