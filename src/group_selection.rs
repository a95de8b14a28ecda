//! Rubber-band selection.
//!
//! `Idle -> Selecting -> Idle`. The band is kept in workspace space and is
//! normalized, so it can be dragged in any direction. Each tick diffs the
//! selection against the nodes the band intersects instead of clearing it.

#[cfg(test)]
#[path = "group_selection_test.rs"]
mod group_selection_test;

use crate::geometry::{Point, Rect, rectangles_intersect};
use crate::nodes::NodeKey;
use crate::selection::SelectionManager;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum BandState {
    #[default]
    Idle,
    Selecting { origin: Point, current: Point },
}

/// Keys whose selection a tick changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    pub selected: Vec<NodeKey>,
    pub unselected: Vec<NodeKey>,
}

impl SelectionDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.unselected.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupSelection {
    state: BandState,
}

impl GroupSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, BandState::Selecting { .. })
    }

    /// Start a band at `at` (workspace space).
    pub fn begin(&mut self, at: Point) {
        tracing::trace!(x = at.x, y = at.y, "group selection started");
        self.state = BandState::Selecting { origin: at, current: at };
    }

    /// Move the free corner. Returns the new band, or `None` when idle.
    pub fn update(&mut self, at: Point) -> Option<Rect> {
        match &mut self.state {
            BandState::Idle => None,
            BandState::Selecting { origin, current } => {
                *current = at;
                Some(Rect::from_corners(*origin, at))
            }
        }
    }

    /// The current band, normalized to a positive size.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        match self.state {
            BandState::Idle => None,
            BandState::Selecting { origin, current } => Some(Rect::from_corners(origin, current)),
        }
    }

    /// Finish or abort the band. Returns `false` if none was active.
    pub fn end(&mut self) -> bool {
        let was = self.is_selecting();
        self.state = BandState::Idle;
        was
    }

    /// Bring the selection in line with the nodes `band` intersects.
    ///
    /// `candidates` are the selectable nodes with their workspace boxes.
    /// When the number of intersecting nodes equals the current selection
    /// size nothing is touched.
    pub fn select_intersecting(
        band: &Rect,
        candidates: &[(NodeKey, Rect)],
        selection: &mut SelectionManager,
    ) -> SelectionDiff {
        let hits: Vec<&NodeKey> = candidates
            .iter()
            .filter(|(_, rect)| !rect.is_empty() && rectangles_intersect(band, rect))
            .map(|(key, _)| key)
            .collect();

        let mut diff = SelectionDiff::default();
        if hits.len() == selection.len() {
            return diff;
        }

        let stale: Vec<NodeKey> = selection
            .selected()
            .iter()
            .filter(|k| !hits.contains(k))
            .cloned()
            .collect();
        for key in stale {
            if selection.set_unselected(&key) {
                diff.unselected.push(key);
            }
        }
        for key in hits {
            if selection.set_selected(key) {
                diff.selected.push(key.clone());
            }
        }
        diff
    }
}
