//! Selection and hover state.
//!
//! Selected keys are kept in selection order. The most recently selected key
//! is primary, every other selected key is secondary. Keys can name nodes or
//! edges; both are visualized elements to the host.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::Serialize;

use crate::nodes::{NodeKey, NodeStore};

/// How a selected key participates in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionRole {
    Primary,
    Secondary,
}

/// The single selection set of the workspace.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<NodeKey>,
    hovered: Option<NodeKey>,
}

impl SelectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutations ---

    /// Add `key` to the selection. Returns `false` if it was already selected.
    pub fn set_selected(&mut self, key: &str) -> bool {
        if self.is_selected(key) {
            return false;
        }
        self.selected.push(key.to_string());
        true
    }

    /// Remove `key` from the selection. Returns `false` if it was not selected.
    pub fn set_unselected(&mut self, key: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|k| k != key);
        self.selected.len() != before
    }

    /// Clear the selection, returning the keys that were selected.
    pub fn deselect_all(&mut self) -> Vec<NodeKey> {
        std::mem::take(&mut self.selected)
    }

    /// Make `key` the only selected key. Returns `true` if anything changed.
    pub fn select_only(&mut self, key: &str) -> bool {
        if self.selected.len() == 1 && self.selected[0] == key {
            return false;
        }
        self.selected.clear();
        self.selected.push(key.to_string());
        true
    }

    pub fn set_hovered(&mut self, key: Option<&str>) -> bool {
        let next = key.map(str::to_string);
        if self.hovered == next {
            return false;
        }
        self.hovered = next;
        true
    }

    /// Drop selected or hovered node keys that are no longer attached.
    ///
    /// `keep` lists non-node keys (edge ids) that stay valid.
    pub fn retain_attached(&mut self, nodes: &NodeStore, keep: &dyn Fn(&str) -> bool) -> Vec<NodeKey> {
        let (kept, dropped): (Vec<NodeKey>, Vec<NodeKey>) =
            std::mem::take(&mut self.selected).into_iter().partition(|k| nodes.contains(k) || keep(k.as_str()));
        self.selected = kept;
        if self.hovered.as_deref().is_some_and(|k| !nodes.contains(k) && !keep(k)) {
            self.hovered = None;
        }
        dropped
    }

    // --- Queries ---

    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|k| k == key)
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn selected(&self) -> &[NodeKey] {
        &self.selected
    }

    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.selected.last().map(String::as_str)
    }

    pub fn secondary(&self) -> impl Iterator<Item = &str> {
        let n = self.selected.len().saturating_sub(1);
        self.selected[..n].iter().map(String::as_str)
    }

    #[must_use]
    pub fn role(&self, key: &str) -> Option<SelectionRole> {
        if self.primary() == Some(key) {
            Some(SelectionRole::Primary)
        } else if self.is_selected(key) {
            Some(SelectionRole::Secondary)
        } else {
            None
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// A node is selectable when it is attached and carries `data-selectable`.
    #[must_use]
    pub fn is_selectable(nodes: &NodeStore, key: &str) -> bool {
        nodes.get(key).is_some_and(|n| n.attributes.selectable)
    }

    /// Keys of every selectable node, in attachment order.
    #[must_use]
    pub fn selectable(nodes: &NodeStore) -> Vec<NodeKey> {
        nodes
            .iter()
            .filter(|n| n.attributes.selectable)
            .map(|n| n.key().to_string())
            .collect()
    }
}
