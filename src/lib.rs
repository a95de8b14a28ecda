//! Interactive workspace engine for node-and-edge visualizations.
//!
//! A host (a custom element in the browser, or the CLI replay tool) owns the
//! rendered nodes. This crate owns everything around them: viewport pan and
//! zoom, anchor-to-anchor edge routing, manual association drawing,
//! selection, rubber-band selection, drag-and-drop, alignment, and canvas
//! sizing. Geometry is always read live through [`layout::Layout`]; the
//! engine answers each input with the [`events::Event`]s the host should
//! dispatch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`workspace`] | Composition root and input routing |
//! | [`geometry`] | Points, boxes, viewport, and client/workspace conversions |
//! | [`anchors`] | Side anchors and closest-pair search |
//! | [`routing`] | Line sketching, SVG path data, overlay rendering |
//! | [`edges`] | Edge registry, recomputation, paint order |
//! | [`nodes`] | Node markers, slots, and the reconciliation pass |
//! | [`layout`] | Geometry source trait and the in-memory [`layout::Scene`] |
//! | [`selection`] | Primary/secondary selection and hover |
//! | [`group_selection`] | Rubber-band selection |
//! | [`association`] | Create/re-route gesture for associations |
//! | [`gestures`] | Wheel, touch, and auto-scroll viewport gestures |
//! | [`drag_drop`] | Drag payloads and drop resolution |
//! | [`alignment`] | Align and distribute operations |
//! | [`sizing`] | Canvas bounds and auto-resize |
//! | [`debug`] | Position labels |
//! | [`input`] | Host input types |
//! | [`events`] | Outgoing events and notification debouncing |
//! | [`config`] | Environment/JSON configuration |
//! | [`consts`] | Shared numeric constants |

pub mod alignment;
pub mod anchors;
pub mod association;
pub mod config;
pub mod consts;
pub mod debug;
pub mod drag_drop;
pub mod edges;
pub mod events;
pub mod geometry;
pub mod gestures;
pub mod group_selection;
pub mod input;
pub mod layout;
pub mod nodes;
pub mod routing;
pub mod selection;
pub mod sizing;
pub mod workspace;

#[cfg(feature = "wasm")]
pub mod bindings;

pub use config::{ConfigError, WorkspaceConfig};
pub use events::Event;
pub use input::Input;
pub use layout::{Layout, Scene};
pub use workspace::Workspace;
