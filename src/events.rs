//! Events the workspace dispatches back to its host.
//!
//! Handlers return events in the order the element would dispatch them. The
//! viewport notifications (`scroll`, `zoomchange`) are debounced instead: they
//! are marked pending and emitted once per burst by
//! [`PendingNotifications::flush`].

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Serialize;

use crate::association::Tip;
use crate::geometry::{Point, Viewport};
use crate::nodes::NodeKey;

/// One end of a manually drawn association.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEndpoint {
    pub id: NodeKey,
    pub point: Point,
    pub slot: String,
}

/// Detail of `anchorassociationcreate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationCreate {
    pub source: SlotEndpoint,
    pub target: SlotEndpoint,
}

/// The association being re-routed and which of its tips moved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRef {
    pub association_id: String,
    pub direction: Tip,
}

/// Detail of `anchorassociationupdate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationUpdate {
    pub source: AssociationRef,
    pub target: SlotEndpoint,
}

/// Everything the workspace tells its host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A node's geometry changed; dependent connectors were recomputed.
    #[serde(rename = "geometrychange")]
    GeometryChange { key: NodeKey },
    /// Dispatched from the source node when a new association is drawn.
    #[serde(rename = "anchorassociationcreate")]
    AnchorAssociationCreate { origin: NodeKey, detail: AssociationCreate },
    /// Dispatched from the association's source node when a tip is re-routed.
    #[serde(rename = "anchorassociationupdate")]
    AnchorAssociationUpdate { origin: NodeKey, detail: AssociationUpdate },
    /// Ask the host to write a new top-left position for a node.
    #[serde(rename = "moved")]
    NodeMoved { key: NodeKey, x: f64, y: f64 },
    #[serde(rename = "scroll")]
    Scroll {
        #[serde(rename = "scrollLeft")]
        scroll_left: f64,
        #[serde(rename = "scrollTop")]
        scroll_top: f64,
    },
    #[serde(rename = "zoomchange")]
    ZoomChange { zoom: i32, scale: f64 },
    /// Canvas bounds grew to fit content.
    #[serde(rename = "resize")]
    Resize { width: f64, height: f64 },
    /// Overlay state (preview line, selection rectangle, edges) changed.
    #[serde(rename = "renderneeded")]
    RenderNeeded,
}

impl Event {
    /// DOM event type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GeometryChange { .. } => "geometrychange",
            Self::AnchorAssociationCreate { .. } => "anchorassociationcreate",
            Self::AnchorAssociationUpdate { .. } => "anchorassociationupdate",
            Self::NodeMoved { .. } => "moved",
            Self::Scroll { .. } => "scroll",
            Self::ZoomChange { .. } => "zoomchange",
            Self::Resize { .. } => "resize",
            Self::RenderNeeded => "renderneeded",
        }
    }

    #[must_use]
    pub fn bubbles(&self) -> bool {
        !matches!(self, Self::RenderNeeded)
    }

    #[must_use]
    pub fn composed(&self) -> bool {
        self.bubbles()
    }

    /// Viewport notifications only report state and cannot be cancelled.
    #[must_use]
    pub fn cancelable(&self) -> bool {
        !matches!(self, Self::Scroll { .. } | Self::ZoomChange { .. } | Self::Resize { .. } | Self::RenderNeeded)
    }
}

/// Debounced viewport notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingNotifications {
    scroll: bool,
    zoom: bool,
}

impl PendingNotifications {
    pub fn mark_scroll(&mut self) {
        self.scroll = true;
    }

    pub fn mark_zoom(&mut self) {
        self.zoom = true;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.scroll && !self.zoom
    }

    /// Emit at most one `scroll` and one `zoomchange` reflecting `viewport` now.
    pub fn flush(&mut self, viewport: &Viewport) -> Vec<Event> {
        let mut out = Vec::new();
        if std::mem::take(&mut self.scroll) {
            out.push(Event::Scroll { scroll_left: viewport.scroll_left, scroll_top: viewport.scroll_top });
        }
        if std::mem::take(&mut self.zoom) {
            out.push(Event::ZoomChange { zoom: viewport.zoom, scale: viewport.scale });
        }
        out
    }
}
