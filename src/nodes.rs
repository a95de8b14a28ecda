//! Visualized nodes: attribute parsing and the attached-node registry.
//!
//! The host owns and renders every node. The workspace only learns about
//! them through a reconciliation pass: the host hands over the flat list of
//! elements it currently renders and the store reports what was attached,
//! detached, or had its marker attributes changed.

#[cfg(test)]
#[path = "nodes_test.rs"]
mod nodes_test;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Stable domain identifier of a visualized node (`data-key`).
pub type NodeKey = String;

/// Attribute names read from host elements.
pub mod attr {
    pub const KEY: &str = "data-key";
    pub const ASSOCIATION_SLOTS: &str = "data-association-slots";
    pub const ASSOCIATION_SLOTS_PROPERTY: &str = "associationSlots";
    pub const ASSOCIATION_SLOT: &str = "data-association-slot";
    pub const SELECTABLE: &str = "data-selectable";
    pub const DRAGGABLE: &str = "draggable";
    pub const ALIGNABLE: &str = "data-alignable";
    pub const VERTICAL_OFFSET: &str = "data-vertical-offset";
    pub const HORIZONTAL_OFFSET: &str = "data-horizontal-offset";
}

/// One host element as seen by the reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub attributes: BTreeMap<String, String>,
    /// Attribute maps of descendant slot elements.
    #[serde(default)]
    pub slots: Vec<BTreeMap<String, String>>,
}

/// Marker attributes of a visualized node.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub key: NodeKey,
    pub association_slots: bool,
    pub selectable: bool,
    pub draggable: bool,
    pub alignable: bool,
}

impl NodeAttributes {
    /// Read marker attributes. Returns `None` for elements without `data-key`.
    #[must_use]
    pub fn from_attributes(attributes: &BTreeMap<String, String>) -> Option<Self> {
        let key = attributes.get(attr::KEY)?.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            association_slots: flag(attributes, attr::ASSOCIATION_SLOTS) || flag(attributes, attr::ASSOCIATION_SLOTS_PROPERTY),
            selectable: flag(attributes, attr::SELECTABLE),
            draggable: attributes.get(attr::DRAGGABLE).is_some_and(|v| v.trim() == "true"),
            alignable: flag(attributes, attr::ALIGNABLE),
        })
    }
}

/// Boolean attribute semantics: present means on, unless spelled `"false"`.
fn flag(attributes: &BTreeMap<String, String>, name: &str) -> bool {
    attributes.get(name).is_some_and(|v| v.trim() != "false")
}

/// Parse a pixel nudge. Missing or malformed values count as zero.
#[must_use]
pub fn parse_offset(raw: Option<&str>) -> f64 {
    match raw.map(str::trim).map(str::parse::<f64>) {
        Some(Ok(v)) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// A named anchor slot inside a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub vertical_offset: f64,
    pub horizontal_offset: f64,
}

impl Slot {
    /// Read a slot element. Returns `None` when it carries no slot name.
    #[must_use]
    pub fn from_attributes(attributes: &BTreeMap<String, String>) -> Option<Self> {
        let name = attributes.get(attr::ASSOCIATION_SLOT)?.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            vertical_offset: parse_offset(attributes.get(attr::VERTICAL_OFFSET).map(String::as_str)),
            horizontal_offset: parse_offset(attributes.get(attr::HORIZONTAL_OFFSET).map(String::as_str)),
        })
    }
}

/// A host element the workspace tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizedNode {
    pub attributes: NodeAttributes,
    pub slots: Vec<Slot>,
}

impl VisualizedNode {
    #[must_use]
    pub fn from_descriptor(element: &ElementDescriptor) -> Option<Self> {
        let attributes = NodeAttributes::from_attributes(&element.attributes)?;
        let slots = element.slots.iter().filter_map(Slot::from_attributes).collect();
        Some(Self { attributes, slots })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.attributes.key
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.name == name)
    }
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciled {
    pub attached: Vec<NodeKey>,
    pub detached: Vec<NodeKey>,
    /// Nodes still present whose attributes or slots differ from before.
    pub changed: Vec<NodeKey>,
}

impl Reconciled {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty() && self.changed.is_empty()
    }
}

/// Attached nodes in attachment order.
#[derive(Debug, Default)]
pub struct NodeStore {
    order: Vec<NodeKey>,
    nodes: HashMap<NodeKey, VisualizedNode>,
}

impl NodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach or replace a node. Returns `true` if the key was not attached before.
    pub fn attach(&mut self, node: VisualizedNode) -> bool {
        let key = node.key().to_string();
        let fresh = self.nodes.insert(key.clone(), node).is_none();
        if fresh {
            self.order.push(key);
        }
        fresh
    }

    /// Detach a node, returning it if it was attached.
    pub fn detach(&mut self, key: &str) -> Option<VisualizedNode> {
        let node = self.nodes.remove(key)?;
        self.order.retain(|k| k != key);
        Some(node)
    }

    /// Bring the store in line with the host's current element list.
    ///
    /// Elements without `data-key` are ignored. When a key appears twice the
    /// last element wins.
    pub fn reconcile(&mut self, elements: &[ElementDescriptor]) -> Reconciled {
        let mut arrival: Vec<NodeKey> = Vec::with_capacity(elements.len());
        let mut incoming: HashMap<NodeKey, VisualizedNode> = HashMap::with_capacity(elements.len());
        for node in elements.iter().filter_map(VisualizedNode::from_descriptor) {
            let key = node.key().to_string();
            if incoming.insert(key.clone(), node).is_none() {
                arrival.push(key);
            }
        }

        let mut report = Reconciled::default();
        let (kept, gone): (Vec<NodeKey>, Vec<NodeKey>) =
            std::mem::take(&mut self.order).into_iter().partition(|k| incoming.contains_key(k));
        self.order = kept;
        for key in gone {
            self.nodes.remove(&key);
            report.detached.push(key);
        }

        for key in arrival {
            let Some(node) = incoming.remove(&key) else {
                continue;
            };
            match self.nodes.get(&key) {
                Some(existing) if *existing == node => {}
                Some(_) => {
                    self.attach(node);
                    report.changed.push(key);
                }
                None => {
                    self.attach(node);
                    report.attached.push(key);
                }
            }
        }
        report
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VisualizedNode> {
        self.nodes.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Nodes in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &VisualizedNode> {
        self.order.iter().filter_map(|k| self.nodes.get(k))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
