//! Manual association drawing.
//!
//! State machine: `Idle -> Drawing(create | update) -> Idle`. While drawing,
//! a preview line follows the pointer. Finishing over a slot emits the
//! create/update event; finishing anywhere else, or pressing Escape, cancels.
//! Whatever the outcome the machine is back in `Idle` with no preview line.

#[cfg(test)]
#[path = "association_test.rs"]
mod association_test;

use serde::{Deserialize, Serialize};

use crate::events::{AssociationCreate, AssociationRef, AssociationUpdate, Event, SlotEndpoint};
use crate::geometry::Point;
use crate::nodes::NodeKey;

/// Which end of an existing association was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tip {
    Start,
    End,
}

/// The live line drawn while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewLine {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
enum DrawMode {
    Create { source: SlotEndpoint },
    Update { association_id: String, tip: Tip, source_key: NodeKey },
}

#[derive(Debug, Clone, Default, PartialEq)]
enum DrawState {
    #[default]
    Idle,
    Drawing { mode: DrawMode, preview: PreviewLine },
}

/// How a drawing gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// Nothing was being drawn.
    Idle,
    /// Completed over a slot; dispatch the event.
    Dispatched(Event),
    /// Ended without effect. Carries the association to un-hide, if any.
    Cancelled { association_id: Option<String> },
}

/// Drives the create/re-route gesture for associations.
#[derive(Debug, Clone, Default)]
pub struct AssociationAnchors {
    state: DrawState,
}

impl AssociationAnchors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    #[must_use]
    pub fn preview(&self) -> Option<PreviewLine> {
        match &self.state {
            DrawState::Idle => None,
            DrawState::Drawing { preview, .. } => Some(*preview),
        }
    }

    /// The association being re-routed, if any.
    #[must_use]
    pub fn updating(&self) -> Option<&str> {
        match &self.state {
            DrawState::Drawing { mode: DrawMode::Update { association_id, .. }, .. } => Some(association_id),
            _ => None,
        }
    }

    /// Start drawing a new association from a slot.
    pub fn begin_create(&mut self, source: SlotEndpoint) {
        tracing::debug!(source = %source.id, slot = %source.slot, "association draw started");
        let preview = PreviewLine { from: source.point, to: source.point };
        self.state = DrawState::Drawing { mode: DrawMode::Create { source }, preview };
    }

    /// Start re-routing one tip of an existing association.
    ///
    /// `fixed` is the tip that stays put, `grabbed` the one being dragged.
    pub fn begin_update(&mut self, association_id: String, tip: Tip, source_key: NodeKey, fixed: Point, grabbed: Point) {
        tracing::debug!(association = %association_id, ?tip, "association re-route started");
        self.state = DrawState::Drawing {
            mode: DrawMode::Update { association_id, tip, source_key },
            preview: PreviewLine { from: fixed, to: grabbed },
        };
    }

    /// Move the free end of the preview line. Returns `false` when idle.
    pub fn drag(&mut self, to: Point) -> bool {
        match &mut self.state {
            DrawState::Idle => false,
            DrawState::Drawing { preview, .. } => {
                preview.to = to;
                true
            }
        }
    }

    /// End the gesture over `target` (`None` when the pointer is not over a slot).
    pub fn finish(&mut self, target: Option<SlotEndpoint>) -> DrawOutcome {
        let DrawState::Drawing { mode, .. } = std::mem::take(&mut self.state) else {
            return DrawOutcome::Idle;
        };
        match (mode, target) {
            (DrawMode::Create { source }, Some(target)) => {
                tracing::debug!(source = %source.id, target = %target.id, "association drawn");
                let origin = source.id.clone();
                DrawOutcome::Dispatched(Event::AnchorAssociationCreate {
                    origin,
                    detail: AssociationCreate { source, target },
                })
            }
            (DrawMode::Update { association_id, tip, source_key }, Some(target)) => {
                tracing::debug!(association = %association_id, target = %target.id, "association re-routed");
                DrawOutcome::Dispatched(Event::AnchorAssociationUpdate {
                    origin: source_key,
                    detail: AssociationUpdate { source: AssociationRef { association_id, direction: tip }, target },
                })
            }
            (DrawMode::Create { .. }, None) => {
                tracing::trace!("association draw ended off-slot");
                DrawOutcome::Cancelled { association_id: None }
            }
            (DrawMode::Update { association_id, .. }, None) => {
                tracing::trace!(association = %association_id, "association re-route ended off-slot");
                DrawOutcome::Cancelled { association_id: Some(association_id) }
            }
        }
    }

    /// Abort the gesture (Escape).
    pub fn cancel(&mut self) -> DrawOutcome {
        match std::mem::take(&mut self.state) {
            DrawState::Idle => DrawOutcome::Idle,
            DrawState::Drawing { mode, .. } => {
                tracing::debug!("association draw cancelled");
                let association_id = match mode {
                    DrawMode::Create { .. } => None,
                    DrawMode::Update { association_id, .. } => Some(association_id),
                };
                DrawOutcome::Cancelled { association_id }
            }
        }
    }
}
