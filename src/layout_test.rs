#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::bounding_box_relative_to;

#[test]
fn client_rect_of_unknown_node_is_none() {
    let scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    assert!(scene.client_rect("missing", &Viewport::default()).is_none());
}

#[test]
fn client_rect_applies_scroll_and_scale() {
    let mut scene = Scene::new(Rect::new(100.0, 50.0, 800.0, 600.0));
    scene.place("a", Rect::new(10.0, 20.0, 40.0, 30.0));
    let vp = Viewport { scroll_left: 5.0, scroll_top: -10.0, scale: 2.0, zoom: 10 };
    assert_eq!(scene.client_rect("a", &vp), Some(Rect::new(130.0, 70.0, 80.0, 60.0)));
}

#[test]
fn relative_box_recovers_placement() {
    let mut scene = Scene::new(Rect::new(30.0, 30.0, 800.0, 600.0));
    let placed = Rect::new(12.0, 34.0, 56.0, 78.0);
    scene.place("a", placed);
    let vp = Viewport { scroll_left: -20.0, scroll_top: 40.0, scale: 0.5, zoom: -5 };
    let client = scene.client_rect("a", &vp);
    let back = client.map(|c| bounding_box_relative_to(&c, &scene.workspace_rect(), &vp));
    assert_eq!(back, Some(placed));
}

#[test]
fn apply_moves_known_nodes_only() {
    let mut scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    scene.place("a", Rect::new(0.0, 0.0, 10.0, 10.0));
    let moved = scene.apply(&[
        Event::NodeMoved { key: "a".into(), x: 50.0, y: 60.0 },
        Event::NodeMoved { key: "ghost".into(), x: 1.0, y: 1.0 },
        Event::RenderNeeded,
    ]);
    assert_eq!(moved, vec!["a".to_string()]);
    assert_eq!(scene.rect("a"), Some(Rect::new(50.0, 60.0, 10.0, 10.0)));
    assert!(scene.rect("ghost").is_none());
}

#[test]
fn remove_forgets_the_node() {
    let mut scene = Scene::new(Rect::default());
    scene.place("a", Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(scene.remove("a").is_some());
    assert!(scene.rect("a").is_none());
}
