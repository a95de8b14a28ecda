//! Connector line sketching and SVG output.
//!
//! A connector starts at the anchor chosen on its source node and ends at the
//! anchor on its target. `Direct` lines are the straight segment between the
//! two; `Rectilinear` lines leave each anchor perpendicular to its side and
//! meet with one or two axis-aligned elbows.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorPair;
use crate::association::PreviewLine;
use crate::edges::EdgeRender;
use crate::geometry::{Point, Rect};

/// How a connector is drawn between its two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Rectilinear,
    Direct,
}

/// Computed connector geometry in workspace space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Ordered polyline vertices; the first lies on the source node.
    pub points: Vec<Point>,
    pub kind: LineKind,
    /// Transform origin used when the renderer animates the line.
    pub origin: Point,
}

impl Line {
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Build the line for an anchor pair.
#[must_use]
pub fn sketch(pair: &AnchorPair, kind: LineKind) -> Line {
    let (s, e) = (pair.start.point, pair.end.point);
    let raw = match kind {
        LineKind::Direct => vec![s, e],
        LineKind::Rectilinear => {
            match (pair.start.side.is_vertical_line(), pair.end.side.is_vertical_line()) {
                (true, true) => {
                    let mid_x = (s.x + e.x) / 2.0;
                    vec![s, Point::new(mid_x, s.y), Point::new(mid_x, e.y), e]
                }
                (false, false) => {
                    let mid_y = (s.y + e.y) / 2.0;
                    vec![s, Point::new(s.x, mid_y), Point::new(e.x, mid_y), e]
                }
                (true, false) => vec![s, Point::new(e.x, s.y), e],
                (false, true) => vec![s, Point::new(s.x, e.y), e],
            }
        }
    };
    Line { points: simplify(raw), kind, origin: s }
}

/// Drop repeated vertices and interior vertices that lie on a straight run.
fn simplify(points: Vec<Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_some_and(|last| last.approx_eq(p)) {
            continue;
        }
        if out.len() >= 2 {
            let a = out[out.len() - 2];
            let b = out[out.len() - 1];
            let collinear = ((a.x - b.x).abs() < f64::EPSILON && (b.x - p.x).abs() < f64::EPSILON)
                || ((a.y - b.y).abs() < f64::EPSILON && (b.y - p.y).abs() < f64::EPSILON);
            if collinear {
                out.pop();
            }
        }
        out.push(p);
    }
    out
}

/// SVG path data (`M x y L x y ...`) for a polyline.
#[must_use]
pub fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd} {} {}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the workspace overlay: edges in paint order, then the association
/// preview line and the group-selection rectangle when present.
#[must_use]
pub fn render_svg(edges: &[EdgeRender], preview: Option<PreviewLine>, band: Option<Rect>) -> String {
    let mut out = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" class="workspace-overlay">"#);
    for edge in edges {
        let mut class = String::from("edge");
        if edge.selection.primary {
            class.push_str(" primary");
        } else if edge.selection.secondary {
            class.push_str(" secondary");
        } else if edge.selection.hover {
            class.push_str(" hover");
        }
        if edge.selection.hidden {
            class.push_str(" hidden");
        }
        out.push_str(&format!(
            r#"<path data-key="{}" class="{class}" d="{}" fill="none"/>"#,
            escape_attr(&edge.id),
            edge.path
        ));
    }
    if let Some(line) = preview {
        out.push_str(&format!(
            r#"<line class="association-preview" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            line.from.x, line.from.y, line.to.x, line.to.y
        ));
    }
    if let Some(rect) = band {
        out.push_str(&format!(
            r#"<rect class="selection-rectangle" x="{}" y="{}" width="{}" height="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height
        ));
    }
    out.push_str("</svg>");
    out
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}
