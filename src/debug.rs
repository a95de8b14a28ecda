//! Debug position labels.
//!
//! Each laid-out node gets a label showing its workspace position. Label ids
//! are random UUIDs assigned on first sight and kept for the node's lifetime.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::geometry::{Point, Rect, Viewport, bounding_box_relative_to, workspace_click_point};
use crate::nodes::NodeKey;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugLabel {
    pub id: Uuid,
    pub key: NodeKey,
    /// `"x, y"` of the node's top-left corner in workspace space.
    pub text: String,
    /// Overlay position: tracks scroll, keeps screen scale.
    pub position: Point,
}

#[derive(Debug, Clone, Default)]
pub struct DebugLabels {
    ids: HashMap<NodeKey, Uuid>,
}

impl DebugLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels for every node with a non-empty client box.
    pub fn labels<'a>(
        &mut self,
        boxes: impl IntoIterator<Item = (&'a str, Rect)>,
        workspace: &Rect,
        viewport: &Viewport,
    ) -> Vec<DebugLabel> {
        boxes
            .into_iter()
            .filter(|(_, client)| !client.is_empty())
            .map(|(key, client)| {
                let id = *self.ids.entry(key.to_string()).or_insert_with(Uuid::new_v4);
                let local = bounding_box_relative_to(&client, workspace, viewport);
                DebugLabel {
                    id,
                    key: key.to_string(),
                    text: format!("{}, {}", local.x.round(), local.y.round()),
                    position: workspace_click_point(Point::new(client.x, client.y), workspace, viewport),
                }
            })
            .collect()
    }

    pub fn forget(&mut self, key: &str) {
        self.ids.remove(key);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
