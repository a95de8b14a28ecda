#![allow(clippy::float_cmp)]

use std::collections::BTreeMap;

use super::*;
use crate::nodes::{ElementDescriptor, attr};

fn element(key: &str, draggable: Option<&str>) -> ElementDescriptor {
    let mut attributes = BTreeMap::new();
    attributes.insert(attr::KEY.to_string(), key.to_string());
    if let Some(value) = draggable {
        attributes.insert(attr::DRAGGABLE.to_string(), value.to_string());
    }
    ElementDescriptor { attributes, slots: Vec::new() }
}

fn store(elements: &[ElementDescriptor]) -> NodeStore {
    let mut nodes = NodeStore::new();
    nodes.reconcile(elements);
    nodes
}

#[test]
fn binds_only_draggable_true() {
    let nodes = store(&[element("a", Some("true")), element("b", Some("false")), element("c", None)]);
    let mut dnd = DragAndDrop::new();
    let report = dnd.bind(&nodes);
    assert_eq!(report.bound, vec!["a".to_string()]);
    assert!(dnd.is_bound("a"));
    assert!(!dnd.is_bound("b"));
    assert!(!dnd.is_bound("c"));
}

#[test]
fn attribute_changes_rebind() {
    let mut dnd = DragAndDrop::new();
    dnd.bind(&store(&[element("a", Some("true")), element("b", None)]));
    let report = dnd.bind(&store(&[element("a", None), element("b", Some("true"))]));
    assert_eq!(report.bound, vec!["b".to_string()]);
    assert_eq!(report.unbound, vec!["a".to_string()]);
    assert_eq!(dnd.bind(&store(&[element("a", None), element("b", Some("true"))])), Rebound::default());
}

#[test]
fn drag_start_on_unbound_node_is_refused() {
    let mut dnd = DragAndDrop::new();
    assert!(dnd.drag_start("a", Point::new(0.0, 0.0)).is_none());
    assert!(!dnd.is_dragging());
}

#[test]
fn internal_drop_reports_delta() {
    let mut dnd = DragAndDrop::new();
    dnd.bind(&store(&[element("a", Some("true"))]));
    let payload = dnd.drag_start("a", Point::new(10.0, 10.0)).expect("bound");
    assert!(payload.is_internal());
    assert_eq!(payload.get(KEY_FORMAT), Some("a"));
    assert_eq!(dnd.drop(&payload, Point::new(40.0, 5.0)), DropOutcome::Internal { dx: 30.0, dy: -5.0 });
    assert!(!dnd.is_dragging());
}

#[test]
fn foreign_payload_is_external() {
    let mut dnd = DragAndDrop::new();
    let mut entries = BTreeMap::new();
    entries.insert(SOURCE_FORMAT.to_string(), "palette".to_string());
    let payload = DragPayload { entries };
    assert_eq!(dnd.drop(&payload, Point::new(1.0, 1.0)), DropOutcome::External);
    assert_eq!(dnd.drop(&DragPayload::default(), Point::new(1.0, 1.0)), DropOutcome::External);
}

#[test]
fn internal_payload_without_drag_is_ignored() {
    let mut dnd = DragAndDrop::new();
    assert_eq!(dnd.drop(&DragPayload::internal("a"), Point::new(1.0, 1.0)), DropOutcome::Ignored);
}

#[test]
fn default_external_hook_does_nothing() {
    let mut hook = NoExternalDrop;
    assert!(hook.on_external_drop(&DragPayload::default(), Point::new(0.0, 0.0)).is_empty());
}
