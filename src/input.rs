//! Input model: modifier keys, buttons, hit-test targets, and the host input stream.
//!
//! Hosts translate native DOM events into these types. `Target` carries the
//! result of the host's own hit-test so the workspace never has to walk a
//! tree. `Input` is the serialized form of every handler call and is what
//! [`Workspace::dispatch`](crate::workspace::Workspace::dispatch) consumes.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::association::Tip;
use crate::drag_drop::DragPayload;
use crate::edges::EdgeDescriptor;
use crate::geometry::Point;
use crate::nodes::{ElementDescriptor, NodeKey};

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape" || self.0 == "Esc"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// One active touch in client space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Stable identifier for the lifetime of the touch.
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// What the pointer is over, as resolved by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Target {
    /// The workspace canvas itself, not any child node.
    Canvas,
    /// A visualized node (or a descendant that is not a slot).
    Node { key: NodeKey },
    /// An element carrying `data-association-slot` inside a slot-bearing node.
    Slot { key: NodeKey, slot: String },
    /// An `association-draggable` endpoint handle of a rendered edge.
    #[serde(rename_all = "camelCase")]
    EdgeHandle { edge_id: String, tip: Tip },
    /// Anything outside the workspace.
    #[default]
    Outside,
}

impl Target {
    /// The node under the pointer, if any.
    #[must_use]
    pub fn node_key(&self) -> Option<&str> {
        match self {
            Self::Node { key } | Self::Slot { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Every input a host can feed the workspace.
///
/// Pointer coordinates are client-space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Input {
    /// The host's child list or marker attributes changed.
    Reconcile { elements: Vec<ElementDescriptor> },
    /// A node's rendered geometry changed.
    GeometryChange { key: NodeKey },
    UpsertEdge { edge: EdgeDescriptor },
    RemoveEdge { id: String },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        target: Target,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Target,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Target,
    },
    Wheel {
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    /// Also used for `touchcancel`. Carries the touches still down.
    TouchEnd { touches: Vec<TouchPoint> },
    /// `detail` is the click count.
    Click { detail: u32 },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    DragStart { key: NodeKey, x: f64, y: f64 },
    DragEnter { x: f64, y: f64 },
    DragOver { x: f64, y: f64 },
    Drop { x: f64, y: f64, payload: DragPayload },
    Select { key: String },
    Deselect { key: String },
    DeselectAll,
    Hover { key: Option<String> },
    Align { op: Alignment },
    SetZoom { zoom: i32 },
    SetScale { scale: f64 },
    SetScroll { left: f64, top: f64 },
    SetSize { width: f64, height: f64 },
    SetAutoResize { enabled: bool },
    SetDebug { enabled: bool },
    Reset,
    /// The current burst settled; emit debounced notifications.
    Flush,
}
