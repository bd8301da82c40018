//! Browser tests for a single rendered task list.

#![cfg(target_arch = "wasm32")]

mod common;

use common::{child_count, click, mount_root, Recorder};
use tasklist_core::{ItemId, ListId, ListSnapshot, Notification, TaskItem, Toggle};
use tasklist_web::{TaskListView, WidgetConfig, DONE_MARKER, OPEN_MARKER};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn two_task_snapshot() -> ListSnapshot {
    ListSnapshot::new(ListId::new("1"), "My List")
        .with_item(
            TaskItem::new("first task")
                .with_id(ItemId::new("2"))
                .with_done(true),
        )
        .with_item(TaskItem::new("second task").with_id(ItemId::new("3")))
}

fn attached(root: &Element) -> TaskListView {
    TaskListView::new(Some(root), None, &WidgetConfig::default()).unwrap()
}

fn row(root: &Element, id: &ItemId) -> Option<Element> {
    root.query_selector(&format!("li[data-id=\"{}\"]", id))
        .unwrap()
}

#[wasm_bindgen_test]
fn detached_list_starts_empty() {
    let list = TaskListView::new(None, None, &WidgetConfig::default()).unwrap();

    assert_eq!(list.name(), "New list");
    assert!(list.items().is_empty());
    assert!(!list.id().as_str().is_empty());
    assert!(!list.is_attached());
    assert!(list.node().parent_node().is_none());
}

#[wasm_bindgen_test]
fn hydrates_from_js_object_with_numeric_ids() {
    let raw = js_sys::JSON::parse(
        r#"{"id":1,"name":"My list","items":[{"id":2,"name":"first list item","done":true}]}"#,
    )
    .unwrap();
    let list = TaskListView::js_new(None, raw).unwrap();

    assert_eq!(list.id().as_str(), "1");
    assert_eq!(list.name(), "My list");
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].name, "first list item");
    assert!(list.items()[0].done);
}

#[wasm_bindgen_test]
fn rejects_malformed_snapshot() {
    let raw = js_sys::JSON::parse(r#"{"name":"no id"}"#).unwrap();
    assert!(TaskListView::js_new(None, raw).is_err());
}

#[wasm_bindgen_test]
fn renders_snapshot_into_container() {
    let (root, _) = mount_root();
    let list = TaskListView::new(Some(&root), Some(two_task_snapshot()), &WidgetConfig::default())
        .unwrap();

    let article = root.first_element_child().unwrap();
    assert_eq!(article.tag_name(), "ARTICLE");
    assert_eq!(article.get_attribute("data-id").as_deref(), Some("1"));
    assert_eq!(article.get_attribute("data-test-id").as_deref(), Some("task-list"));
    assert_eq!(
        article.query_selector("header h5").unwrap().unwrap().text_content().as_deref(),
        Some("My List")
    );

    let first = row(&root, &ItemId::new("2")).unwrap();
    assert_eq!(first.get_attribute("data-done").as_deref(), Some("true"));
    assert_eq!(
        first.query_selector(".toggler").unwrap().unwrap().text_content().as_deref(),
        Some(DONE_MARKER)
    );

    let second = row(&root, &ItemId::new("3")).unwrap();
    assert_eq!(second.get_attribute("data-done").as_deref(), Some("false"));
    assert_eq!(
        second.query_selector(".toggler").unwrap().unwrap().text_content().as_deref(),
        Some(OPEN_MARKER)
    );
    assert_eq!(
        second.query_selector("h6").unwrap().unwrap().text_content().as_deref(),
        Some("second task")
    );

    assert!(list.is_attached());
    assert!(article.query_selector("form input[name=\"task\"]").unwrap().is_some());
}

#[wasm_bindgen_test]
fn add_appends_row_and_notifies() {
    let (root, _) = mount_root();
    let created = Recorder::on(&root, Notification::TASK_CREATED);
    let list = attached(&root);
    let ul = root.query_selector("ul").unwrap().unwrap();

    assert_eq!(child_count(&ul), 0);

    let item = list.add("Name for a task").unwrap();

    assert!(!item.done);
    assert_eq!(item.name, "Name for a task");
    assert_eq!(list.items(), vec![item.clone()]);
    assert_eq!(child_count(&ul), 1);

    let li = row(&root, &item.id).unwrap();
    assert_eq!(
        li.query_selector("h6").unwrap().unwrap().text_content().as_deref(),
        Some("Name for a task")
    );

    assert_eq!(created.count(), 1);
    assert_eq!(created.field(0, "listId").as_deref(), Some(list.id().as_str()));
}

#[wasm_bindgen_test]
fn detached_mutations_touch_only_the_model() {
    let list = TaskListView::new(None, None, &WidgetConfig::default()).unwrap();
    let node = list.node();
    let created = Recorder::on(&node, Notification::TASK_CREATED);
    let toggled = Recorder::on(&node, Notification::TASK_TOGGLED);
    let removed = Recorder::on(&node, Notification::TASK_REMOVED);

    let kept = list.add("quiet").unwrap();
    let dropped = list.add("gone").unwrap();

    assert_eq!(list.items().len(), 2);
    assert!(node.query_selector("li").unwrap().is_none());

    assert_eq!(list.toggle(&kept.id, Toggle::Flip).unwrap(), Some(true));
    assert!(list.remove(&dropped.id).unwrap());

    assert_eq!(list.items(), vec![kept.with_done(true)]);
    assert!(node.query_selector("li").unwrap().is_none());
    assert_eq!(created.count(), 0);
    assert_eq!(toggled.count(), 0);
    assert_eq!(removed.count(), 0);
}

#[wasm_bindgen_test]
fn detached_hydrated_rows_are_rendered_once() {
    let list =
        TaskListView::new(None, Some(two_task_snapshot()), &WidgetConfig::default()).unwrap();
    let node = list.node();

    assert_eq!(child_count(&node.query_selector("ul").unwrap().unwrap()), 2);

    list.toggle(&ItemId::new("3"), Toggle::SetTo(true)).unwrap();
    assert!(list.item(&ItemId::new("3")).unwrap().done);
    assert_eq!(
        row(&node, &ItemId::new("3"))
            .unwrap()
            .get_attribute("data-done")
            .as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn hydrates_from_json_text() {
    let raw = JsValue::from_str(r#"{"id":"7","name":"From text","items":[{"id":8,"name":"one"}]}"#);
    let list = TaskListView::js_new(None, raw).unwrap();

    assert_eq!(list.id().as_str(), "7");
    assert_eq!(list.name(), "From text");
    assert_eq!(list.item(&ItemId::new("8")).map(|item| item.done), Some(false));

    assert!(TaskListView::js_new(None, JsValue::from_str("not json")).is_err());
}

#[wasm_bindgen_test]
fn remaining_counts_open_items() {
    let (root, _) = mount_root();
    let list = TaskListView::new(Some(&root), Some(two_task_snapshot()), &WidgetConfig::default())
        .unwrap();

    assert_eq!(list.remaining(), 1);
    assert_eq!(list.js_remaining(), 1);

    click(&root, "li[data-id=\"3\"] .toggler");
    assert_eq!(list.remaining(), 0);

    list.add("later").unwrap();
    assert_eq!(list.js_remaining(), 1);
}

#[wasm_bindgen_test]
fn toggle_updates_row_and_notifies() {
    let (root, _) = mount_root();
    let toggled = Recorder::on(&root, Notification::TASK_TOGGLED);
    let list = attached(&root);
    let item = list.add("task").unwrap();
    let li = row(&root, &item.id).unwrap();
    let marker = li.query_selector(".toggler").unwrap().unwrap();

    assert_eq!(list.toggle(&item.id, Toggle::Flip).unwrap(), Some(true));
    assert_eq!(li.get_attribute("data-done").as_deref(), Some("true"));
    assert_eq!(marker.text_content().as_deref(), Some(DONE_MARKER));

    assert_eq!(list.toggle(&item.id, Toggle::SetTo(true)).unwrap(), Some(true));
    assert_eq!(li.get_attribute("data-done").as_deref(), Some("true"));

    assert_eq!(list.toggle(&item.id, Toggle::SetTo(false)).unwrap(), Some(false));
    assert_eq!(li.get_attribute("data-done").as_deref(), Some("false"));
    assert_eq!(marker.text_content().as_deref(), Some(OPEN_MARKER));

    assert_eq!(toggled.count(), 3);
    assert_eq!(toggled.field(0, "itemId").as_deref(), Some(item.id.as_str()));
}

#[wasm_bindgen_test]
fn toggle_absent_id_is_noop() {
    let (root, _) = mount_root();
    let toggled = Recorder::on(&root, Notification::TASK_TOGGLED);
    let list = attached(&root);
    list.add("task").unwrap();
    let before = list.items();

    assert_eq!(list.toggle(&ItemId::new("missing"), Toggle::Flip).unwrap(), None);
    assert_eq!(list.items(), before);
    assert_eq!(toggled.count(), 0);
}

#[wasm_bindgen_test]
fn js_toggle_without_value_flips() {
    let (root, _) = mount_root();
    let list = attached(&root);
    let item = list.add("task").unwrap();

    assert_eq!(list.js_toggle(item.id.as_str(), None).unwrap(), Some(true));
    assert_eq!(list.js_toggle(item.id.as_str(), None).unwrap(), Some(false));
    assert_eq!(list.js_toggle(item.id.as_str(), Some(false)).unwrap(), Some(false));
}

#[wasm_bindgen_test]
fn clicking_toggler_flips_item() {
    let (root, _) = mount_root();
    let list = attached(&root);
    let item = list.add("task").unwrap();

    click(&root, &format!("li[data-id=\"{}\"] .toggler", item.id));

    assert!(list.items()[0].done);
}

#[wasm_bindgen_test]
fn remove_drops_row_and_keeps_order() {
    let (root, _) = mount_root();
    let removed = Recorder::on(&root, Notification::TASK_REMOVED);
    let list = attached(&root);
    let a = list.add("a").unwrap();
    let b = list.add("b").unwrap();
    let c = list.add("c").unwrap();

    assert!(list.remove(&b.id).unwrap());

    assert_eq!(list.items(), vec![a.clone(), c.clone()]);
    assert!(row(&root, &b.id).is_none());
    assert!(row(&root, &a.id).is_some());
    assert!(row(&root, &c.id).is_some());
    assert_eq!(removed.count(), 1);
    assert_eq!(removed.field(0, "itemId").as_deref(), Some(b.id.as_str()));

    assert!(!list.remove(&ItemId::new("missing")).unwrap());
    assert_eq!(list.items().len(), 2);
    assert_eq!(removed.count(), 1);
}

#[wasm_bindgen_test]
fn clicking_task_remover_removes_item() {
    let (root, _) = mount_root();
    let list = attached(&root);
    let item = list.add("task").unwrap();

    click(&root, &format!("li[data-id=\"{}\"] .task-remover", item.id));

    assert!(list.items().is_empty());
    assert!(row(&root, &item.id).is_none());
}

#[wasm_bindgen_test]
fn destroy_notifies_once_then_removes_subtree() {
    let (root, _) = mount_root();
    let destroyed = Recorder::on(&root, Notification::LIST_DESTROYED);
    let list = attached(&root);
    list.add("kept in memory").unwrap();

    list.destroy().unwrap();

    assert_eq!(destroyed.count(), 1);
    assert_eq!(destroyed.field(0, "listId").as_deref(), Some(list.id().as_str()));
    assert_eq!(child_count(&root), 0);
    assert_eq!(list.items().len(), 1);
    assert!(list.is_destroyed());

    list.destroy().unwrap();
    assert_eq!(destroyed.count(), 1);
}

#[wasm_bindgen_test]
fn header_remover_destroys_list() {
    let (root, _) = mount_root();
    let destroyed = Recorder::on(&root, Notification::LIST_DESTROYED);
    let list = attached(&root);

    click(&root, ".list-remover");

    assert_eq!(destroyed.count(), 1);
    assert!(list.is_destroyed());
    assert_eq!(child_count(&root), 0);
}

#[wasm_bindgen_test]
fn form_submission_adds_cleaned_task() {
    let (root, _) = mount_root();
    let list = attached(&root);
    let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();
    let input: HtmlInputElement = root
        .query_selector("input[name=\"task\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    input.set_value("   \t ");
    form.request_submit().unwrap();
    assert!(list.items().is_empty());

    input.set_value("  buy   fresh\tmilk ");
    form.request_submit().unwrap();

    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].name, "buy fresh milk");
    assert_eq!(input.value(), "");
}

#[wasm_bindgen_test]
fn rename_updates_header() {
    let (root, _) = mount_root();
    let list = attached(&root);

    assert_eq!(list.rename(" Groceries ").unwrap(), "Groceries");
    assert_eq!(
        root.query_selector("h5").unwrap().unwrap().text_content().as_deref(),
        Some("Groceries")
    );
    assert!(list.rename("  ").is_err());
}
