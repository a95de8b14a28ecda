//! Points, rectangles, and conversions between client and workspace space.
//!
//! The canvas is rendered with `scale(s) translate(scroll_left, scroll_top)`,
//! so a workspace-space point `p` lands at client position
//! `origin + (p + scroll) * s`. Everything that compares two nodes converts to
//! workspace space first; these helpers are the only place that math lives.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::ANCHOR_EPSILON;

/// A point in either client or workspace space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates match `other` within [`ANCHOR_EPSILON`].
    #[must_use]
    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() < ANCHOR_EPSILON && (self.y - other.y).abs() < ANCHOR_EPSILON
    }
}

/// Axis-aligned bounding box, the analogue of a `DOMRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning two arbitrary corners; negative extents are normalized.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// A box with no area has not been laid out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Same size, moved to a new top-left corner.
    #[must_use]
    pub fn with_origin(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Scroll offset and scale of the workspace canvas.
///
/// `zoom` is the integer step last requested by the host; `scale` is the
/// effective factor and may be set directly by wheel and pinch gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scale: f64,
    pub zoom: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scroll_left: 0.0, scroll_top: 0.0, scale: 1.0, zoom: 0 }
    }
}

/// Convert a pointer's client coordinates into workspace-local coordinates.
///
/// `workspace` is the client rectangle of the workspace element itself.
#[must_use]
pub fn to_workspace_point(client: Point, workspace: &Rect, viewport: &Viewport) -> Point {
    Point {
        x: (client.x - workspace.x) / viewport.scale - viewport.scroll_left,
        y: (client.y - workspace.y) / viewport.scale - viewport.scroll_top,
    }
}

/// Inverse of [`to_workspace_point`].
#[must_use]
pub fn to_client_point(point: Point, workspace: &Rect, viewport: &Viewport) -> Point {
    Point {
        x: workspace.x + (point.x + viewport.scroll_left) * viewport.scale,
        y: workspace.y + (point.y + viewport.scroll_top) * viewport.scale,
    }
}

/// Element-local point with the scroll offset removed but the scale kept.
///
/// This is the coordinate space of overlays that follow the scrolled content
/// while being drawn at screen size. Dividing by the scale yields
/// [`to_workspace_point`].
#[must_use]
pub fn workspace_click_point(client: Point, workspace: &Rect, viewport: &Viewport) -> Point {
    Point {
        x: client.x - workspace.x - viewport.scroll_left * viewport.scale,
        y: client.y - workspace.y - viewport.scroll_top * viewport.scale,
    }
}

/// Express a node's client bounding box in workspace-local space.
#[must_use]
pub fn bounding_box_relative_to(client_box: &Rect, workspace: &Rect, viewport: &Viewport) -> Rect {
    let origin = to_workspace_point(Point::new(client_box.x, client_box.y), workspace, viewport);
    Rect {
        x: origin.x,
        y: origin.y,
        width: client_box.width / viewport.scale,
        height: client_box.height / viewport.scale,
    }
}

/// Project a workspace-space box into client space (what the renderer would report).
#[must_use]
pub fn client_box_of(workspace_box: &Rect, workspace: &Rect, viewport: &Viewport) -> Rect {
    let origin = to_client_point(Point::new(workspace_box.x, workspace_box.y), workspace, viewport);
    Rect {
        x: origin.x,
        y: origin.y,
        width: workspace_box.width * viewport.scale,
        height: workspace_box.height * viewport.scale,
    }
}

/// Axis-aligned intersection test. Boxes that only share an edge do not intersect.
#[must_use]
pub fn rectangles_intersect(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}
