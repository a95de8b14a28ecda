//! Connector edges between visualized nodes.
//!
//! The host owns the domain edges and registers them with [`EdgeManager::upsert`].
//! Geometry is computed lazily, per node, whenever a node reports a geometry
//! change. Each edge moves through `Unrouted -> Routed -> Stale -> Routed`;
//! an edge whose endpoint box is missing falls back to `Unrouted` and is left
//! out of the render output.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

use serde::{Deserialize, Serialize};

use crate::anchors::{AnchorPair, find_closest_anchor_pair};
use crate::association::Tip;
use crate::geometry::{Point, Rect};
use crate::nodes::NodeKey;
use crate::routing::{Line, LineKind, path_data, sketch};
use crate::selection::{SelectionManager, SelectionRole};

/// Domain metadata of an edge as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub id: String,
    pub source: NodeKey,
    pub target: NodeKey,
    #[serde(default)]
    pub kind: LineKind,
}

/// Render flags driven by the selection manager.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSelection {
    pub primary: bool,
    pub secondary: bool,
    pub hover: bool,
    /// Selection decoration suppressed while a tip is being re-routed.
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteState {
    #[default]
    Unrouted,
    Routed,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub descriptor: EdgeDescriptor,
    pub selection: EdgeSelection,
    state: RouteState,
    anchors: Option<AnchorPair>,
    line: Option<Line>,
}

impl Edge {
    fn new(descriptor: EdgeDescriptor) -> Self {
        Self {
            descriptor,
            selection: EdgeSelection::default(),
            state: RouteState::Unrouted,
            anchors: None,
            line: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    #[must_use]
    pub fn state(&self) -> RouteState {
        self.state
    }

    #[must_use]
    pub fn anchors(&self) -> Option<&AnchorPair> {
        self.anchors.as_ref()
    }

    #[must_use]
    pub fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }

    /// Whether `key` is the source or target of this edge.
    #[must_use]
    pub fn touches(&self, key: &str) -> bool {
        self.descriptor.source == key || self.descriptor.target == key
    }

    /// Anchor points this edge occupies on `key`.
    fn anchors_on(&self, key: &str) -> Vec<Point> {
        let Some(pair) = self.anchors.filter(|_| self.state == RouteState::Routed) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(2);
        if self.descriptor.source == key {
            out.push(pair.start.point);
        }
        if self.descriptor.target == key {
            out.push(pair.end.point);
        }
        out
    }

    fn drop_geometry(&mut self) {
        self.anchors = None;
        self.line = None;
        self.state = RouteState::Unrouted;
    }
}

/// One edge as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRender {
    pub id: String,
    pub source: NodeKey,
    pub target: NodeKey,
    pub kind: LineKind,
    pub points: Vec<Point>,
    /// SVG path `d` attribute.
    pub path: String,
    pub origin: Point,
    pub selection: EdgeSelection,
}

/// Owns every registered edge, in insertion order.
#[derive(Debug, Clone)]
pub struct EdgeManager {
    edges: Vec<Edge>,
    padding: f64,
}

impl EdgeManager {
    /// `padding` is the anchor inset passed to the anchor search.
    #[must_use]
    pub fn new(padding: f64) -> Self {
        Self { edges: Vec::new(), padding }
    }

    // --- Registration ---

    /// Register or update an edge. Geometry is not computed here.
    ///
    /// Returns `true` if the edge was not registered before.
    pub fn upsert(&mut self, descriptor: EdgeDescriptor) -> bool {
        if let Some(edge) = self.edges.iter_mut().find(|e| e.descriptor.id == descriptor.id) {
            if edge.descriptor != descriptor {
                tracing::debug!(edge = %descriptor.id, "edge updated");
                if edge.state == RouteState::Routed {
                    edge.state = RouteState::Stale;
                }
                edge.descriptor = descriptor;
            }
            return false;
        }
        tracing::debug!(edge = %descriptor.id, source = %descriptor.source, target = %descriptor.target, "edge registered");
        self.edges.push(Edge::new(descriptor));
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Edge> {
        let idx = self.edges.iter().position(|e| e.id() == id)?;
        tracing::debug!(edge = %id, "edge removed");
        Some(self.edges.remove(idx))
    }

    // --- Geometry ---

    /// Recompute every edge attached to `key`.
    ///
    /// `boxes` answers workspace-space boxes for node keys. Edges recomputed
    /// later in this pass avoid anchors taken by edges recomputed earlier.
    /// Returns how many edges were routed.
    pub fn recompute_for_node(&mut self, key: &str, boxes: &dyn Fn(&str) -> Option<Rect>) -> usize {
        for edge in self.edges.iter_mut().filter(|e| e.touches(key)) {
            edge.state = RouteState::Stale;
        }
        self.route_stale(boxes)
    }

    /// Recompute every edge, e.g. after a reset or a viewport-independent relayout.
    pub fn recompute_all(&mut self, boxes: &dyn Fn(&str) -> Option<Rect>) -> usize {
        for edge in &mut self.edges {
            edge.state = RouteState::Stale;
        }
        self.route_stale(boxes)
    }

    fn route_stale(&mut self, boxes: &dyn Fn(&str) -> Option<Rect>) -> usize {
        let mut routed = 0;
        for idx in 0..self.edges.len() {
            if self.edges[idx].state != RouteState::Stale {
                continue;
            }
            let (source, target) = {
                let d = &self.edges[idx].descriptor;
                (d.source.clone(), d.target.clone())
            };
            let used: Vec<Point> = self
                .edges
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .flat_map(|(_, other)| {
                    let mut points = other.anchors_on(&source);
                    points.extend(other.anchors_on(&target));
                    points
                })
                .collect();

            let pair = match (boxes(&source), boxes(&target)) {
                (Some(a), Some(b)) => find_closest_anchor_pair(&a, &b, self.padding, &used),
                _ => None,
            };
            let edge = &mut self.edges[idx];
            match pair {
                Some(pair) => {
                    edge.line = Some(sketch(&pair, edge.descriptor.kind));
                    edge.anchors = Some(pair);
                    edge.state = RouteState::Routed;
                    routed += 1;
                }
                None => {
                    tracing::trace!(edge = %edge.descriptor.id, "edge has no geometry");
                    edge.drop_geometry();
                }
            }
        }
        routed
    }

    /// Drop all cached geometry.
    pub fn clear(&mut self) {
        for edge in &mut self.edges {
            edge.drop_geometry();
        }
    }

    // --- Selection ---

    /// Copy primary/secondary/hover flags from the selection manager.
    pub fn sync_selection(&mut self, selection: &SelectionManager) {
        for edge in &mut self.edges {
            let role = selection.role(edge.id());
            edge.selection.primary = role == Some(SelectionRole::Primary);
            edge.selection.secondary = role == Some(SelectionRole::Secondary);
            edge.selection.hover = selection.hovered() == Some(edge.id());
        }
    }

    /// Returns `false` when the edge does not exist.
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.edges.iter_mut().find(|e| e.id() == id) {
            Some(edge) => {
                edge.selection.hidden = hidden;
                true
            }
            None => false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The grabbed tip of a routed edge and the tip that stays fixed.
    #[must_use]
    pub fn tips(&self, id: &str, grabbed: Tip) -> Option<(Point, Point)> {
        let line = self.get(id)?.line.as_ref()?;
        let (start, end) = (line.start()?, line.end()?);
        Some(match grabbed {
            Tip::Start => (end, start),
            Tip::End => (start, end),
        })
    }

    /// Routed edges in paint order: primary-selected edges come last.
    #[must_use]
    pub fn render(&self) -> Vec<EdgeRender> {
        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        let mut hover = Vec::new();
        let mut rest = Vec::new();
        for edge in &self.edges {
            let Some(line) = edge.line.as_ref() else {
                continue;
            };
            let bucket = if edge.selection.primary {
                &mut primary
            } else if edge.selection.secondary {
                &mut secondary
            } else if edge.selection.hover {
                &mut hover
            } else {
                &mut rest
            };
            bucket.push(EdgeRender {
                id: edge.descriptor.id.clone(),
                source: edge.descriptor.source.clone(),
                target: edge.descriptor.target.clone(),
                kind: line.kind,
                points: line.points.clone(),
                path: path_data(&line.points),
                origin: line.origin,
                selection: edge.selection,
            });
        }
        let mut out: Vec<EdgeRender> = primary.into_iter().chain(secondary).chain(hover).chain(rest).collect();
        out.reverse();
        out
    }
}

impl Default for EdgeManager {
    fn default() -> Self {
        Self::new(crate::consts::ANCHOR_PADDING)
    }
}
