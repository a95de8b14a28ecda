//! Anchor points on node borders and closest-pair selection between two nodes.
//!
//! Every side of a box exposes three anchors: one inset from the start corner,
//! one at the middle, one inset from the end corner. Anchors along east/west
//! sides run top to bottom, along north/south sides left to right. That order
//! is also the tie-break order when several pairs are equally close.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use serde::{Deserialize, Serialize};

use crate::consts::BORDER_COMPENSATION;
use crate::geometry::{Point, Rect};

/// A side of a node's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// Parse a compass name as used by `data-association-slot`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "north" | "top" => Some(Self::North),
            "south" | "bottom" => Some(Self::South),
            "east" | "right" => Some(Self::East),
            "west" | "left" => Some(Self::West),
            _ => None,
        }
    }

    /// East and west sides are vertical lines; their anchors vary along y.
    #[must_use]
    pub fn is_vertical_line(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

/// Position of an anchor along its side: left/center/right on north and south,
/// top/middle/bottom on east and west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPosition {
    Start,
    Center,
    End,
}

const POSITIONS: [AnchorPosition; 3] = [AnchorPosition::Start, AnchorPosition::Center, AnchorPosition::End];

/// A concrete anchor: where it is and which side/slot produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point,
    pub side: Side,
    pub position: AnchorPosition,
}

/// The chosen connection: `start` lies on the first box, `end` on the second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPair {
    pub start: Anchor,
    pub end: Anchor,
}

impl AnchorPair {
    #[must_use]
    pub fn points(&self) -> [Point; 2] {
        [self.start.point, self.end.point]
    }
}

/// Where the second box lies relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Sector {
    /// Candidate sides on the first box and on the second box, horizontal side first.
    #[must_use]
    pub fn candidate_sides(self) -> (&'static [Side], &'static [Side]) {
        const N: &[Side] = &[Side::North];
        const S: &[Side] = &[Side::South];
        const E: &[Side] = &[Side::East];
        const W: &[Side] = &[Side::West];
        const EN: &[Side] = &[Side::East, Side::North];
        const ES: &[Side] = &[Side::East, Side::South];
        const WN: &[Side] = &[Side::West, Side::North];
        const WS: &[Side] = &[Side::West, Side::South];

        match self {
            Self::North => (N, S),
            Self::NorthEast => (EN, WS),
            Self::East => (E, W),
            Self::SouthEast => (ES, WN),
            Self::South => (S, N),
            Self::SouthWest => (WS, EN),
            Self::West => (W, E),
            Self::NorthWest => (WN, ES),
        }
    }
}

/// Classify `b` against `a`.
///
/// Separation along an axis wins; when the boxes overlap on both axes the
/// dominant axis of the center-to-center offset decides.
#[must_use]
pub fn sector_of(a: &Rect, b: &Rect) -> Sector {
    let east = b.left() >= a.right();
    let west = b.right() <= a.left();
    let south = b.top() >= a.bottom();
    let north = b.bottom() <= a.top();

    match (east, west, north, south) {
        (true, _, true, _) => Sector::NorthEast,
        (true, _, _, true) => Sector::SouthEast,
        (_, true, true, _) => Sector::NorthWest,
        (_, true, _, true) => Sector::SouthWest,
        (true, _, _, _) => Sector::East,
        (_, true, _, _) => Sector::West,
        (_, _, true, _) => Sector::North,
        (_, _, _, true) => Sector::South,
        _ => {
            let (ca, cb) = (a.center(), b.center());
            let (dx, dy) = (cb.x - ca.x, cb.y - ca.y);
            if dx.abs() >= dy.abs() {
                if dx >= 0.0 { Sector::East } else { Sector::West }
            } else if dy >= 0.0 {
                Sector::South
            } else {
                Sector::North
            }
        }
    }
}

/// The three anchor points along one side of `rect`, in deterministic order.
///
/// Start and end points are inset by `padding` (capped at half the side length);
/// the constant coordinate sits on the side's line plus the border compensation.
#[must_use]
pub fn edge_anchor_points(rect: &Rect, padding: f64, side: Side) -> [Point; 3] {
    let anchors = edge_anchors(rect, padding, side);
    [anchors[0].point, anchors[1].point, anchors[2].point]
}

/// Like [`edge_anchor_points`], keeping the side and position of each point.
#[must_use]
pub fn edge_anchors(rect: &Rect, padding: f64, side: Side) -> [Anchor; 3] {
    let along = if side.is_vertical_line() { rect.height } else { rect.width };
    let inset = padding.max(0.0).min(along / 2.0);
    let center = rect.center();

    POSITIONS.map(|position| {
        let point = if side.is_vertical_line() {
            let line = if side == Side::East { rect.right() } else { rect.left() };
            let x = line + BORDER_COMPENSATION;
            let y = match position {
                AnchorPosition::Start => rect.top() + inset,
                AnchorPosition::Center => center.y,
                AnchorPosition::End => rect.bottom() - inset,
            };
            Point::new(x, y)
        } else {
            let line = if side == Side::South { rect.bottom() } else { rect.top() };
            let y = line + BORDER_COMPENSATION;
            let x = match position {
                AnchorPosition::Start => rect.left() + inset,
                AnchorPosition::Center => center.x,
                AnchorPosition::End => rect.right() - inset,
            };
            Point::new(x, y)
        };
        Anchor { point, side, position }
    })
}

/// Pick the nearest anchor pair between `a` and `b`, skipping anchors in `used`.
///
/// Returns `None` when either box has not been laid out or every candidate
/// anchor is already taken. Ties keep the first pair in iteration order.
#[must_use]
pub fn find_closest_anchor_pair(a: &Rect, b: &Rect, padding: f64, used: &[Point]) -> Option<AnchorPair> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let (sides_a, sides_b) = sector_of(a, b).candidate_sides();
    let is_used = |p: Point| used.iter().any(|u| u.approx_eq(p));

    let mut best: Option<(f64, AnchorPair)> = None;
    for &side_a in sides_a {
        for start in edge_anchors(a, padding, side_a) {
            if is_used(start.point) {
                continue;
            }
            for &side_b in sides_b {
                for end in edge_anchors(b, padding, side_b) {
                    if is_used(end.point) {
                        continue;
                    }
                    let distance = start.point.distance(end.point);
                    if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                        best = Some((distance, AnchorPair { start, end }));
                    }
                }
            }
        }
    }
    best.map(|(_, pair)| pair)
}
