//! Native drag-and-drop of visualized nodes.
//!
//! Every node carrying `draggable="true"` is bound for `dragstart`; the bound
//! set is refreshed from each reconciliation pass. A drop whose payload names
//! this workspace as its source moves the selected draggable nodes by the drag
//! delta. Any other drop goes to the [`ExternalDrop`] hook.

#[cfg(test)]
#[path = "drag_drop_test.rs"]
mod drag_drop_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::geometry::Point;
use crate::nodes::{NodeKey, NodeStore};

/// Data-transfer format naming the element type a drag started from.
pub const SOURCE_FORMAT: &str = "modeling/source";

/// Element type identifier of the workspace itself.
pub const WORKSPACE_ELEMENT_TYPE: &str = "viz-workspace";

/// Data-transfer format carrying the dragged node key.
pub const KEY_FORMAT: &str = "modeling/key";

/// The drag's data-transfer entries, by format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragPayload {
    pub entries: BTreeMap<String, String>,
}

impl DragPayload {
    /// Payload for a drag that starts on one of this workspace's nodes.
    #[must_use]
    pub fn internal(key: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(SOURCE_FORMAT.to_string(), WORKSPACE_ELEMENT_TYPE.to_string());
        entries.insert(KEY_FORMAT.to_string(), key.to_string());
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.get(SOURCE_FORMAT) == Some(WORKSPACE_ELEMENT_TYPE)
    }
}

/// Host-specific handling of drops that did not originate in the workspace.
pub trait ExternalDrop {
    /// `at` is the drop position in workspace space.
    fn on_external_drop(&mut self, payload: &DragPayload, at: Point) -> Vec<Event> {
        tracing::trace!(formats = payload.entries.len(), x = at.x, y = at.y, "external drop ignored");
        Vec::new()
    }
}

/// The default hook: external drops do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExternalDrop;

impl ExternalDrop for NoExternalDrop {}

/// What a drop resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Move the selected draggable nodes by this workspace-space delta.
    Internal { dx: f64, dy: f64 },
    External,
    /// Internal payload with no drag in progress here.
    Ignored,
}

/// Result of rebinding listeners after reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rebound {
    pub bound: Vec<NodeKey>,
    pub unbound: Vec<NodeKey>,
}

#[derive(Debug, Clone, Default)]
pub struct DragAndDrop {
    bound: BTreeSet<NodeKey>,
    origin: Option<Point>,
}

impl DragAndDrop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every draggable node and unbind the rest.
    pub fn bind(&mut self, nodes: &NodeStore) -> Rebound {
        let next: BTreeSet<NodeKey> =
            nodes.iter().filter(|n| n.attributes.draggable).map(|n| n.key().to_string()).collect();
        let report = Rebound {
            bound: next.difference(&self.bound).cloned().collect(),
            unbound: self.bound.difference(&next).cloned().collect(),
        };
        self.bound = next;
        report
    }

    #[must_use]
    pub fn is_bound(&self, key: &str) -> bool {
        self.bound.contains(key)
    }

    /// `dragstart` on `key` at `at` (workspace space). `None` if `key` is not draggable.
    pub fn drag_start(&mut self, key: &str, at: Point) -> Option<DragPayload> {
        if !self.is_bound(key) {
            return None;
        }
        tracing::debug!(key = %key, "drag started");
        self.origin = Some(at);
        Some(DragPayload::internal(key))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Resolve a drop at `at` (workspace space). Ends any drag in progress.
    pub fn drop(&mut self, payload: &DragPayload, at: Point) -> DropOutcome {
        let origin = self.origin.take();
        if !payload.is_internal() {
            return DropOutcome::External;
        }
        match origin {
            Some(origin) => DropOutcome::Internal { dx: at.x - origin.x, dy: at.y - origin.y },
            None => {
                tracing::trace!("internal drop without a drag in progress");
                DropOutcome::Ignored
            }
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
