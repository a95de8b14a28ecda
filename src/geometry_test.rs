#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn scrolled(scroll_left: f64, scroll_top: f64, scale: f64) -> Viewport {
    Viewport { scroll_left, scroll_top, scale, zoom: 0 }
}

// --- Point ---

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_approx_eq_tolerates_float_noise() {
    assert!(Point::new(1.0, 2.0).approx_eq(Point::new(1.0 + 1e-9, 2.0)));
    assert!(!Point::new(1.0, 2.0).approx_eq(Point::new(1.1, 2.0)));
}

// --- Rect ---

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 200.0, 360.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.right(), 210.0);
    assert_eq!(r.bottom(), 380.0);
    assert!(point_approx_eq(r.center(), Point::new(110.0, 200.0)));
}

#[test]
fn rect_from_corners_normalizes_negative_extent() {
    let r = Rect::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn rect_zero_size_is_empty() {
    assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_empty());
    assert!(Rect::new(5.0, 5.0, 10.0, 0.0).is_empty());
    assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).is_empty());
}

#[test]
fn rect_nan_size_is_empty() {
    assert!(Rect::new(0.0, 0.0, f64::NAN, 10.0).is_empty());
}

#[test]
fn rect_union_covers_both() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, -5.0, 5.0, 5.0);
    assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
}

// --- Conversions ---

#[test]
fn to_workspace_point_identity_viewport() {
    let ws = Rect::new(0.0, 0.0, 800.0, 600.0);
    let p = to_workspace_point(Point::new(50.0, 75.0), &ws, &Viewport::default());
    assert!(point_approx_eq(p, Point::new(50.0, 75.0)));
}

#[test]
fn to_workspace_point_subtracts_element_origin() {
    let ws = Rect::new(100.0, 40.0, 800.0, 600.0);
    let p = to_workspace_point(Point::new(150.0, 90.0), &ws, &Viewport::default());
    assert!(point_approx_eq(p, Point::new(50.0, 50.0)));
}

#[test]
fn to_workspace_point_inverts_scale_then_scroll() {
    let ws = Rect::new(0.0, 0.0, 800.0, 600.0);
    let vp = scrolled(20.0, -10.0, 2.0);
    let p = to_workspace_point(Point::new(100.0, 100.0), &ws, &vp);
    assert!(point_approx_eq(p, Point::new(30.0, 60.0)));
}

#[test]
fn client_point_round_trips() {
    let ws = Rect::new(12.0, 34.0, 800.0, 600.0);
    let vp = scrolled(-45.0, 17.5, 0.75);
    let original = Point::new(321.0, -12.0);
    let client = to_client_point(original, &ws, &vp);
    assert!(point_approx_eq(to_workspace_point(client, &ws, &vp), original));
}

#[test]
fn workspace_click_point_keeps_scale() {
    let ws = Rect::new(10.0, 10.0, 800.0, 600.0);
    let vp = scrolled(5.0, 5.0, 2.0);
    let client = Point::new(110.0, 70.0);
    let click = workspace_click_point(client, &ws, &vp);
    assert!(point_approx_eq(click, Point::new(90.0, 50.0)));
    let full = to_workspace_point(client, &ws, &vp);
    assert!(approx_eq(click.x / vp.scale, full.x));
    assert!(approx_eq(click.y / vp.scale, full.y));
}

#[test]
fn bounding_box_relative_to_unscales_size() {
    let ws = Rect::new(0.0, 0.0, 800.0, 600.0);
    let vp = scrolled(10.0, 0.0, 2.0);
    let client = Rect::new(40.0, 40.0, 100.0, 60.0);
    let rel = bounding_box_relative_to(&client, &ws, &vp);
    assert_eq!(rel, Rect::new(10.0, 20.0, 50.0, 30.0));
}

#[test]
fn client_box_of_is_inverse_of_relative_box() {
    let ws = Rect::new(7.0, 9.0, 800.0, 600.0);
    let vp = scrolled(3.0, -8.0, 1.5);
    let local = Rect::new(20.0, 30.0, 40.0, 50.0);
    let back = bounding_box_relative_to(&client_box_of(&local, &ws, &vp), &ws, &vp);
    assert!(approx_eq(back.x, local.x));
    assert!(approx_eq(back.y, local.y));
    assert!(approx_eq(back.width, local.width));
    assert!(approx_eq(back.height, local.height));
}

// --- Intersection ---

#[test]
fn overlapping_rectangles_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(rectangles_intersect(&a, &b));
    assert!(rectangles_intersect(&b, &a));
}

#[test]
fn contained_rectangle_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(rectangles_intersect(&outer, &inner));
}

#[test]
fn edge_touching_rectangles_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!rectangles_intersect(&a, &b));
}

#[test]
fn disjoint_rectangles_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(50.0, 50.0, 10.0, 10.0);
    assert!(!rectangles_intersect(&a, &b));
}
