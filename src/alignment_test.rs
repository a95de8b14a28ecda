#![allow(clippy::float_cmp)]

use super::*;

fn item(key: &str, x: f64, y: f64, w: f64, h: f64) -> (NodeKey, Rect) {
    (key.to_string(), Rect::new(x, y, w, h))
}

fn apply(items: &[(NodeKey, Rect)], placements: &[Placement]) -> Vec<Rect> {
    items
        .iter()
        .map(|(key, r)| match placements.iter().find(|p| &p.key == key) {
            Some(p) => r.with_origin(p.x, p.y),
            None => *r,
        })
        .collect()
}

// =============================================================
// Single-axis alignment
// =============================================================

#[test]
fn vertical_top_aligns_everyone_to_the_reference_y() {
    let items = vec![item("a", 0.0, 30.0, 50.0, 50.0), item("b", 100.0, 80.0, 50.0, 20.0), item("c", 200.0, 5.0, 50.0, 70.0)];
    let placements = align(Alignment::VerticalTop, &items);
    let after = apply(&items, &placements);
    assert!(after.iter().all(|r| r.y == 30.0));
    // x never changes for a vertical alignment
    assert_eq!(after.iter().map(|r| r.x).collect::<Vec<_>>(), vec![0.0, 100.0, 200.0]);
}

#[test]
fn only_moved_items_are_reported() {
    let items = vec![item("a", 0.0, 30.0, 50.0, 50.0), item("b", 100.0, 30.0, 50.0, 20.0), item("c", 200.0, 5.0, 50.0, 70.0)];
    let placements = align(Alignment::VerticalTop, &items);
    assert_eq!(placements, vec![Placement { key: "c".into(), x: 200.0, y: 30.0 }]);
}

#[test]
fn vertical_bottom_and_center() {
    let items = vec![item("a", 0.0, 0.0, 10.0, 100.0), item("b", 20.0, 300.0, 10.0, 20.0)];
    assert_eq!(align(Alignment::VerticalBottom, &items), vec![Placement { key: "b".into(), x: 20.0, y: 80.0 }]);
    assert_eq!(align(Alignment::VerticalCenter, &items), vec![Placement { key: "b".into(), x: 20.0, y: 40.0 }]);
}

#[test]
fn horizontal_left_right_center() {
    let items = vec![item("a", 100.0, 0.0, 200.0, 10.0), item("b", 0.0, 50.0, 50.0, 10.0)];
    assert_eq!(align(Alignment::HorizontalLeft, &items), vec![Placement { key: "b".into(), x: 100.0, y: 50.0 }]);
    assert_eq!(align(Alignment::HorizontalRight, &items), vec![Placement { key: "b".into(), x: 250.0, y: 50.0 }]);
    assert_eq!(align(Alignment::HorizontalCenter, &items), vec![Placement { key: "b".into(), x: 175.0, y: 50.0 }]);
}

#[test]
fn fewer_than_two_items_is_a_no_op() {
    assert!(align(Alignment::VerticalTop, &[]).is_empty());
    assert!(align(Alignment::HorizontalDistribute, &[item("a", 5.0, 5.0, 10.0, 10.0)]).is_empty());
}

// =============================================================
// Distribution
// =============================================================

#[test]
fn vertical_distribute_spaces_middle_items_evenly() {
    let items = vec![item("a", 0.0, 0.0, 10.0, 10.0), item("b", 0.0, 100.0, 10.0, 20.0), item("c", 0.0, 40.0, 10.0, 10.0)];
    let placements = align(Alignment::VerticalDistribute, &items);
    assert_eq!(
        placements,
        vec![Placement { key: "b".into(), x: 0.0, y: 50.0 }, Placement { key: "c".into(), x: 0.0, y: 110.0 }]
    );
}

#[test]
fn horizontal_distribute_pins_first_and_last_to_the_extents() {
    let items = vec![
        item("a", 50.0, 0.0, 20.0, 10.0),
        item("b", 0.0, 0.0, 20.0, 10.0),
        item("c", 300.0, 0.0, 40.0, 10.0),
        item("d", 100.0, 0.0, 20.0, 10.0),
    ];
    let after = apply(&items, &align(Alignment::HorizontalDistribute, &items));
    assert_eq!(after[0].x, 0.0);
    assert_eq!(after[3].right(), 340.0);
    let gap_ab = after[1].left() - after[0].right();
    let gap_bc = after[2].left() - after[1].right();
    let gap_cd = after[3].left() - after[2].right();
    assert!((gap_ab - gap_bc).abs() < 1e-9);
    assert!((gap_bc - gap_cd).abs() < 1e-9);
}

#[test]
fn operation_names_use_camel_case() {
    let op: Alignment = serde_json::from_str(r#""horizontalDistribute""#).unwrap();
    assert_eq!(op, Alignment::HorizontalDistribute);
}
