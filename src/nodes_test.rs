#![allow(clippy::float_cmp)]

use std::collections::BTreeMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

fn element(key: &str, extra: &[(&str, &str)]) -> ElementDescriptor {
    let mut attributes = attrs(extra);
    attributes.insert(attr::KEY.to_string(), key.to_string());
    ElementDescriptor { attributes, slots: Vec::new() }
}

fn keys(store: &NodeStore) -> Vec<String> {
    store.iter().map(|n| n.key().to_string()).collect()
}

// =============================================================
// Attribute parsing
// =============================================================

#[test]
fn element_without_key_is_not_a_node() {
    assert!(NodeAttributes::from_attributes(&attrs(&[("data-selectable", "")])).is_none());
    assert!(NodeAttributes::from_attributes(&attrs(&[("data-key", "  ")])).is_none());
}

#[test]
fn marker_attributes_are_presence_flags() {
    let parsed = NodeAttributes::from_attributes(&attrs(&[
        ("data-key", "entity-1"),
        ("data-selectable", ""),
        ("data-alignable", "true"),
        ("data-association-slots", ""),
    ]));
    let Some(parsed) = parsed else {
        panic!("expected node attributes");
    };
    assert_eq!(parsed.key, "entity-1");
    assert!(parsed.selectable);
    assert!(parsed.alignable);
    assert!(parsed.association_slots);
    assert!(!parsed.draggable);
}

#[test]
fn explicit_false_turns_a_flag_off() {
    let parsed = NodeAttributes::from_attributes(&attrs(&[("data-key", "a"), ("data-selectable", "false")]));
    assert!(parsed.is_some_and(|p| !p.selectable));
}

#[test]
fn association_slots_property_spelling_is_accepted() {
    let parsed = NodeAttributes::from_attributes(&attrs(&[("data-key", "a"), ("associationSlots", "")]));
    assert!(parsed.is_some_and(|p| p.association_slots));
}

#[test]
fn draggable_requires_literal_true() {
    let yes = NodeAttributes::from_attributes(&attrs(&[("data-key", "a"), ("draggable", "true")]));
    let no = NodeAttributes::from_attributes(&attrs(&[("data-key", "a"), ("draggable", "")]));
    assert!(yes.is_some_and(|p| p.draggable));
    assert!(no.is_some_and(|p| !p.draggable));
}

#[test]
fn parse_offset_falls_back_to_zero() {
    assert_eq!(parse_offset(Some("12.5")), 12.5);
    assert_eq!(parse_offset(Some(" -3 ")), -3.0);
    assert_eq!(parse_offset(Some("abc")), 0.0);
    assert_eq!(parse_offset(Some("NaN")), 0.0);
    assert_eq!(parse_offset(Some("inf")), 0.0);
    assert_eq!(parse_offset(None), 0.0);
}

#[test]
fn slot_reads_name_and_offsets() {
    let slot = Slot::from_attributes(&attrs(&[
        ("data-association-slot", "east"),
        ("data-vertical-offset", "4"),
        ("data-horizontal-offset", "oops"),
    ]));
    assert_eq!(
        slot,
        Some(Slot { name: "east".into(), vertical_offset: 4.0, horizontal_offset: 0.0 })
    );
    assert!(Slot::from_attributes(&attrs(&[("data-vertical-offset", "4")])).is_none());
}

#[test]
fn node_keeps_only_named_slots() {
    let mut el = element("a", &[("data-association-slots", "")]);
    el.slots = vec![attrs(&[("data-association-slot", "north")]), attrs(&[("class", "decoration")])];
    let Some(node) = VisualizedNode::from_descriptor(&el) else {
        panic!("expected node");
    };
    assert_eq!(node.slots.len(), 1);
    assert!(node.slot("north").is_some());
    assert!(node.slot("south").is_none());
}

// =============================================================
// NodeStore
// =============================================================

#[test]
fn attach_and_detach() {
    let mut store = NodeStore::new();
    let Some(node) = VisualizedNode::from_descriptor(&element("a", &[])) else {
        panic!("expected node");
    };
    assert!(store.attach(node.clone()));
    assert!(!store.attach(node));
    assert_eq!(store.len(), 1);
    assert!(store.detach("a").is_some());
    assert!(store.detach("a").is_none());
    assert!(store.is_empty());
}

#[test]
fn reconcile_reports_attached_in_order() {
    let mut store = NodeStore::new();
    let report = store.reconcile(&[element("b", &[]), element("a", &[]), ElementDescriptor::default()]);
    assert_eq!(report.attached, vec!["b".to_string(), "a".to_string()]);
    assert!(report.detached.is_empty());
    assert_eq!(keys(&store), vec!["b", "a"]);
}

#[test]
fn reconcile_reports_detached_and_changed() {
    let mut store = NodeStore::new();
    store.reconcile(&[element("a", &[]), element("b", &[]), element("c", &[])]);

    let report = store.reconcile(&[element("a", &[]), element("c", &[("draggable", "true")])]);
    assert_eq!(report.detached, vec!["b".to_string()]);
    assert_eq!(report.changed, vec!["c".to_string()]);
    assert!(report.attached.is_empty());
    assert!(store.get("c").is_some_and(|n| n.attributes.draggable));
    assert!(!store.contains("b"));
}

#[test]
fn reconcile_with_same_elements_is_empty() {
    let mut store = NodeStore::new();
    let elements = [element("a", &[("data-selectable", "")])];
    store.reconcile(&elements);
    assert!(store.reconcile(&elements).is_empty());
}

#[test]
fn large_reconcile_keeps_attachment_order() {
    let mut store = NodeStore::new();
    let names: Vec<String> = (0..2000).map(|i| format!("n{i}")).collect();
    let all: Vec<ElementDescriptor> = names.iter().map(|k| element(k, &[])).collect();
    assert_eq!(store.reconcile(&all).attached.len(), 2000);

    let odd: Vec<ElementDescriptor> = names.iter().skip(1).step_by(2).map(|k| element(k, &[])).collect();
    let report = store.reconcile(&odd);
    assert_eq!(report.detached.len(), 1000);
    assert_eq!(report.detached[..2], ["n0".to_string(), "n2".to_string()]);
    assert_eq!(keys(&store)[..3], ["n1", "n3", "n5"]);
}

#[test]
fn duplicate_keys_keep_the_last_element() {
    let mut store = NodeStore::new();
    store.reconcile(&[element("a", &[]), element("a", &[("data-selectable", "")])]);
    assert_eq!(store.len(), 1);
    assert!(store.get("a").is_some_and(|n| n.attributes.selectable));
}
