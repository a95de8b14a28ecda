//! Viewport gestures: wheel pan/zoom, touch pan/pinch, triple-click reset,
//! and edge auto-scroll.
//!
//! The controller owns the only copy of [`Viewport`]. Gesture state does not
//! persist across events beyond the numeric viewport and the previous touch
//! positions needed to compute deltas; [`GestureState`] only records what the
//! most recent event did.

#[cfg(test)]
#[path = "gestures_test.rs"]
mod gestures_test;

use crate::consts::{
    MAX_SCALE, MAX_WHEEL_PRESSURE, MAX_ZOOM, MIN_SCALE, MIN_ZOOM, PINCH_DIVISOR, SCROLL_EDGE_PX, SCROLL_STEP_PX,
    WHEEL_PRESSURE_DIVISOR, ZOOM_STEP,
};
use crate::geometry::{Point, Rect, Viewport};
use crate::input::{Modifiers, TouchPoint, WheelDelta};

/// What the last gesture event did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Panning,
    Zooming,
}

/// Which parts of the viewport an event changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportChange {
    pub scrolled: bool,
    pub zoomed: bool,
}

impl ViewportChange {
    const NONE: Self = Self { scrolled: false, zoomed: false };

    #[must_use]
    pub fn any(self) -> bool {
        self.scrolled || self.zoomed
    }
}

/// Scale for an integer zoom step, clamped to the allowed range.
#[must_use]
pub fn scale_for_zoom(zoom: i32) -> f64 {
    (1.0 + f64::from(zoom) * ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE)
}

/// Nearest zoom step for a scale.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn zoom_for_scale(scale: f64) -> i32 {
    // The clamp keeps the rounded value well inside i32.
    let steps = ((scale - 1.0) / ZOOM_STEP).round().clamp(f64::from(MIN_ZOOM), f64::from(MAX_ZOOM));
    steps as i32
}

#[derive(Debug, Clone)]
pub struct Gestures {
    viewport: Viewport,
    state: GestureState,
    touches: Vec<TouchPoint>,
    scroll_edge: f64,
    scroll_step: f64,
}

impl Default for Gestures {
    fn default() -> Self {
        Self::new(SCROLL_EDGE_PX, SCROLL_STEP_PX)
    }
}

impl Gestures {
    /// `scroll_edge` is the auto-scroll trigger distance, `scroll_step` the
    /// size of one auto-scroll step, both in client pixels.
    #[must_use]
    pub fn new(scroll_edge: f64, scroll_step: f64) -> Self {
        Self {
            viewport: Viewport::default(),
            state: GestureState::Idle,
            touches: Vec::new(),
            scroll_edge,
            scroll_step,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    // --- Direct setters ---

    /// Returns `true` if the scroll offset changed.
    pub fn set_scroll(&mut self, left: f64, top: f64) -> bool {
        if !left.is_finite() || !top.is_finite() {
            return false;
        }
        let changed = left != self.viewport.scroll_left || top != self.viewport.scroll_top;
        self.viewport.scroll_left = left;
        self.viewport.scroll_top = top;
        changed
    }

    /// Set the effective scale, clamped. `zoom` follows as the nearest step.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        let changed = scale != self.viewport.scale;
        self.viewport.scale = scale;
        self.viewport.zoom = zoom_for_scale(scale);
        changed
    }

    /// Set the integer zoom step, clamped. `scale` is derived from it.
    pub fn set_zoom(&mut self, zoom: i32) -> bool {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let scale = scale_for_zoom(zoom);
        let changed = zoom != self.viewport.zoom || scale != self.viewport.scale;
        self.viewport.zoom = zoom;
        self.viewport.scale = scale;
        changed
    }

    // --- Wheel ---

    /// Ctrl/Cmd+wheel zooms; any other wheel pans.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> ViewportChange {
        if modifiers.command() {
            self.state = GestureState::Zooming;
            let pressure = (-delta.dy).clamp(-MAX_WHEEL_PRESSURE, MAX_WHEEL_PRESSURE);
            if pressure == 0.0 || !pressure.is_finite() {
                return ViewportChange::NONE;
            }
            let zoomed = self.set_scale(self.viewport.scale + pressure / WHEEL_PRESSURE_DIVISOR);
            tracing::trace!(scale = self.viewport.scale, "wheel zoom");
            return ViewportChange { scrolled: false, zoomed };
        }

        self.state = GestureState::Panning;
        let (dx, dy) = if modifiers.shift && delta.dx == 0.0 { (delta.dy, 0.0) } else { (delta.dx, delta.dy) };
        let scale = self.viewport.scale;
        let scrolled = self.set_scroll(self.viewport.scroll_left - dx / scale, self.viewport.scroll_top - dy / scale);
        ViewportChange { scrolled, zoomed: false }
    }

    // --- Touch ---

    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        self.touches = touches.to_vec();
    }

    /// One finger pans by the raw client delta. Two fingers moving in
    /// opposite vertical directions pinch-zoom.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> ViewportChange {
        let deltas: Vec<(TouchPoint, Point)> = touches
            .iter()
            .filter_map(|t| {
                let prev = self.touches.iter().find(|p| p.id == t.id)?;
                let (from, to) = (prev.point(), t.point());
                Some((*prev, Point::new(to.x - from.x, to.y - from.y)))
            })
            .collect();
        self.touches = touches.to_vec();

        match (touches.len(), deltas.as_slice()) {
            (1, [(_, d)]) => {
                self.state = GestureState::Panning;
                let scrolled = self.set_scroll(self.viewport.scroll_left + d.x, self.viewport.scroll_top + d.y);
                ViewportChange { scrolled, zoomed: false }
            }
            (2, [(p1, d1), (p2, d2)]) => {
                let opposite = (d1.y > 0.0 && d2.y < 0.0) || (d1.y < 0.0 && d2.y > 0.0);
                if !opposite {
                    return ViewportChange::NONE;
                }
                self.state = GestureState::Zooming;
                let magnitude = (d1.y.abs() + d2.y.abs()) / PINCH_DIVISOR;
                // Fingers spread apart when the upper one moves up.
                let upper_dy = if p1.y <= p2.y { d1.y } else { d2.y };
                let signed = if upper_dy < 0.0 { magnitude } else { -magnitude };
                let zoomed = self.set_scale(self.viewport.scale + signed);
                tracing::trace!(scale = self.viewport.scale, "pinch zoom");
                ViewportChange { scrolled: false, zoomed }
            }
            _ => ViewportChange::NONE,
        }
    }

    /// `remaining` are the touches still down (empty for `touchcancel`).
    pub fn on_touch_end(&mut self, remaining: &[TouchPoint]) {
        self.touches = remaining.to_vec();
        if self.touches.is_empty() {
            self.state = GestureState::Idle;
        }
    }

    // --- Click ---

    /// A triple click resets zoom and scrolls back to the origin.
    pub fn on_click(&mut self, detail: u32) -> ViewportChange {
        if detail != 3 {
            return ViewportChange::NONE;
        }
        tracing::debug!("viewport reset by triple click");
        let zoomed = self.set_zoom(0);
        let scrolled = self.set_scroll(0.0, 0.0);
        ViewportChange { scrolled, zoomed }
    }

    // --- Auto-scroll ---

    /// Scroll one fixed step toward any workspace edge `client` is near.
    ///
    /// At most one step per axis per call, so calling this every frame of a
    /// drag scrolls at a constant rate.
    pub fn scroll_if_needed(&mut self, client: Point, workspace: &Rect) -> bool {
        let step = self.scroll_step / self.viewport.scale;
        let mut left = self.viewport.scroll_left;
        let mut top = self.viewport.scroll_top;

        if client.x - workspace.left() < self.scroll_edge {
            left += step;
        } else if workspace.right() - client.x < self.scroll_edge {
            left -= step;
        }
        if client.y - workspace.top() < self.scroll_edge {
            top += step;
        } else if workspace.bottom() - client.y < self.scroll_edge {
            top -= step;
        }
        self.set_scroll(left, top)
    }

    /// Back to the initial viewport with no touches tracked.
    pub fn reset(&mut self) -> ViewportChange {
        self.touches.clear();
        self.state = GestureState::Idle;
        let zoomed = self.set_zoom(0);
        let scrolled = self.set_scroll(0.0, 0.0);
        ViewportChange { scrolled, zoomed }
    }
}
