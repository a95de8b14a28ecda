//! Geometry queries against the host's rendered layout.
//!
//! In a browser the answers come from `getBoundingClientRect`; [`Scene`] is an
//! in-memory stand-in that keeps workspace-space boxes and projects them the
//! way the canvas transform would.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use crate::events::Event;
use crate::geometry::{Rect, Viewport, client_box_of};
use crate::nodes::NodeKey;

/// Synchronous geometry reads. Implementations must not cache across calls.
pub trait Layout {
    /// Client rectangle of the workspace element itself.
    fn workspace_rect(&self) -> Rect;

    /// Client bounding box of a node as currently rendered, `None` when detached.
    ///
    /// `viewport` is the transform the workspace last applied; hosts that read
    /// live layout may ignore it.
    fn client_rect(&self, key: &str, viewport: &Viewport) -> Option<Rect>;
}

/// In-memory layout holding node boxes in workspace space.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    workspace: Rect,
    boxes: HashMap<NodeKey, Rect>,
}

impl Scene {
    #[must_use]
    pub fn new(workspace: Rect) -> Self {
        Self { workspace, boxes: HashMap::new() }
    }

    /// Position a node (workspace space).
    pub fn place(&mut self, key: impl Into<NodeKey>, rect: Rect) {
        self.boxes.insert(key.into(), rect);
    }

    pub fn remove(&mut self, key: &str) -> Option<Rect> {
        self.boxes.remove(key)
    }

    /// Workspace-space box of a node.
    #[must_use]
    pub fn rect(&self, key: &str) -> Option<Rect> {
        self.boxes.get(key).copied()
    }

    /// Move the workspace element itself (e.g. the page scrolled).
    pub fn set_workspace_rect(&mut self, rect: Rect) {
        self.workspace = rect;
    }

    /// Apply `NodeMoved` notifications. Returns the keys whose position changed.
    pub fn apply(&mut self, events: &[Event]) -> Vec<NodeKey> {
        let mut moved = Vec::new();
        for event in events {
            if let Event::NodeMoved { key, x, y } = event {
                if let Some(rect) = self.boxes.get_mut(key) {
                    *rect = rect.with_origin(*x, *y);
                    if !moved.contains(key) {
                        moved.push(key.clone());
                    }
                }
            }
        }
        moved
    }
}

impl Layout for Scene {
    fn workspace_rect(&self) -> Rect {
        self.workspace
    }

    fn client_rect(&self, key: &str, viewport: &Viewport) -> Option<Rect> {
        self.boxes.get(key).map(|r| client_box_of(r, &self.workspace, viewport))
    }
}
