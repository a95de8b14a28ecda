//! Alignment and distribution of a multi-selection.
//!
//! The first item is the fixed reference for single-axis alignment. The
//! distribute operations pin the first item to the minimum extent and the
//! last to the maximum extent of the whole set, then space the others
//! evenly in between, in the order given.

#[cfg(test)]
#[path = "alignment_test.rs"]
mod alignment_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::nodes::NodeKey;

/// Positions closer than this are considered unchanged.
const MOVE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    VerticalTop,
    VerticalBottom,
    VerticalCenter,
    HorizontalLeft,
    HorizontalRight,
    HorizontalCenter,
    VerticalDistribute,
    HorizontalDistribute,
}

/// A new top-left position for one node (workspace space).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub key: NodeKey,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn start(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.left(),
            Self::Y => r.top(),
        }
    }

    fn size(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.width,
            Self::Y => r.height,
        }
    }

    fn moved(self, r: &Rect, start: f64) -> Rect {
        match self {
            Self::X => r.with_origin(start, r.y),
            Self::Y => r.with_origin(r.x, start),
        }
    }
}

/// Compute new positions for `items`. Only items that actually move are returned.
///
/// Fewer than two items is a no-op.
#[must_use]
pub fn align(op: Alignment, items: &[(NodeKey, Rect)]) -> Vec<Placement> {
    if items.len() < 2 {
        return Vec::new();
    }
    let reference = items[0].1;
    let targets: Vec<Rect> = match op {
        Alignment::VerticalTop => along(items, Axis::Y, |_| reference.top()),
        Alignment::VerticalBottom => along(items, Axis::Y, |r| reference.bottom() - r.height),
        Alignment::VerticalCenter => along(items, Axis::Y, |r| reference.center().y - r.height / 2.0),
        Alignment::HorizontalLeft => along(items, Axis::X, |_| reference.left()),
        Alignment::HorizontalRight => along(items, Axis::X, |r| reference.right() - r.width),
        Alignment::HorizontalCenter => along(items, Axis::X, |r| reference.center().x - r.width / 2.0),
        Alignment::VerticalDistribute => distribute(items, Axis::Y),
        Alignment::HorizontalDistribute => distribute(items, Axis::X),
    };

    items
        .iter()
        .zip(targets)
        .filter(|((_, before), after)| {
            (before.x - after.x).abs() > MOVE_EPSILON || (before.y - after.y).abs() > MOVE_EPSILON
        })
        .map(|((key, _), after)| Placement { key: key.clone(), x: after.x, y: after.y })
        .collect()
}

fn along(items: &[(NodeKey, Rect)], axis: Axis, start: impl Fn(&Rect) -> f64) -> Vec<Rect> {
    items.iter().map(|(_, r)| axis.moved(r, start(r))).collect()
}

fn distribute(items: &[(NodeKey, Rect)], axis: Axis) -> Vec<Rect> {
    let rects: Vec<Rect> = items.iter().map(|(_, r)| *r).collect();
    let (first, last) = (rects[0], rects[rects.len() - 1]);

    let min = rects.iter().map(|r| axis.start(r)).fold(f64::INFINITY, f64::min);
    let max = rects.iter().map(|r| axis.start(r) + axis.size(r)).fold(f64::NEG_INFINITY, f64::max);

    let middle = &rects[1..rects.len() - 1];
    let span = (max - axis.size(&last)) - (min + axis.size(&first));
    let free = span - middle.iter().map(|r| axis.size(r)).sum::<f64>();
    #[allow(clippy::cast_precision_loss)]
    let gap = free / (rects.len() - 1) as f64;

    let mut out = Vec::with_capacity(rects.len());
    out.push(axis.moved(&first, min));
    let mut current = min + axis.size(&first);
    for r in middle {
        out.push(axis.moved(r, current + gap));
        current += gap + axis.size(r);
    }
    out.push(axis.moved(&last, max - axis.size(&last)));
    out
}
