//! Canvas bounds.
//!
//! With auto-resize on, the canvas grows to keep every node plus a margin
//! inside it. It never shrinks on its own.

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;

use serde::Serialize;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RESIZE_MARGIN};
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSizing {
    pub width: f64,
    pub height: f64,
    pub auto_resize: bool,
    pub margin: f64,
}

impl Default for WorkspaceSizing {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, auto_resize: false, margin: RESIZE_MARGIN }
    }
}

impl WorkspaceSizing {
    /// Set explicit bounds. Negative or non-finite sizes are ignored.
    pub fn set_size(&mut self, width: f64, height: f64) -> bool {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return false;
        }
        let changed = width != self.width || height != self.height;
        self.width = width;
        self.height = height;
        changed
    }

    /// Grow to fit `content` (union of node boxes, workspace space).
    ///
    /// Returns `true` if the bounds changed. Does nothing unless auto-resize is on.
    pub fn fit(&mut self, content: Option<Rect>) -> bool {
        let Some(content) = content.filter(|_| self.auto_resize) else {
            return false;
        };
        let width = self.width.max(content.right() + self.margin);
        let height = self.height.max(content.bottom() + self.margin);
        if width == self.width && height == self.height {
            return false;
        }
        tracing::debug!(width, height, "workspace grown to fit content");
        self.width = width;
        self.height = height;
        true
    }
}
