//! Shared numeric constants for the workspace crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest scale the viewport may reach.
pub const MIN_SCALE: f64 = 0.2;

/// Largest scale the viewport may reach.
pub const MAX_SCALE: f64 = 3.0;

/// Scale change per integer zoom step (`scale = 1 + zoom * ZOOM_STEP`).
pub const ZOOM_STEP: f64 = 0.1;

/// Lowest zoom step; maps to [`MIN_SCALE`].
pub const MIN_ZOOM: i32 = -8;

/// Highest zoom step; maps to [`MAX_SCALE`].
pub const MAX_ZOOM: i32 = 20;

/// Per-event cap on ctrl+wheel zoom "pressure".
pub const MAX_WHEEL_PRESSURE: f64 = 7.0;

/// Wheel pressure is divided by this before being added to the scale.
pub const WHEEL_PRESSURE_DIVISOR: f64 = 100.0;

/// Combined two-finger vertical travel (px) per unit of scale change.
pub const PINCH_DIVISOR: f64 = 300.0;

// ── Auto-scroll ─────────────────────────────────────────────────

/// Distance from a workspace edge (client px) that triggers auto-scroll.
pub const SCROLL_EDGE_PX: f64 = 40.0;

/// Size of one auto-scroll step in client pixels, before scale compensation.
pub const SCROLL_STEP_PX: f64 = 25.0;

// ── Anchors ─────────────────────────────────────────────────────

/// Default inset of the start/end anchors from the box corners.
pub const ANCHOR_PADDING: f64 = 1.0;

/// Added to the constant coordinate of every anchor to sit on the rendered border.
pub const BORDER_COMPENSATION: f64 = 1.0;

/// Two anchor points closer than this are treated as the same pixel.
pub const ANCHOR_EPSILON: f64 = 1e-6;

// ── Sizing ──────────────────────────────────────────────────────

/// Space kept between the right/bottom-most node and the canvas bounds.
pub const RESIZE_MARGIN: f64 = 40.0;

/// Initial canvas width when nothing else is configured.
pub const DEFAULT_WIDTH: f64 = 2000.0;

/// Initial canvas height when nothing else is configured.
pub const DEFAULT_HEIGHT: f64 = 2000.0;
