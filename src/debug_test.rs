use super::*;

#[test]
fn labels_skip_unlaid_out_nodes_and_keep_ids() {
    let ws = Rect::new(10.0, 10.0, 800.0, 600.0);
    let vp = Viewport::default();
    let mut labels = DebugLabels::new();
    let boxes = [("a", Rect::new(60.0, 40.0, 100.0, 50.0)), ("b", Rect::new(0.0, 0.0, 0.0, 0.0))];

    let first = labels.labels(boxes, &ws, &vp);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].key, "a");
    assert_eq!(first[0].text, "50, 30");
    assert_eq!(first[0].position, Point::new(50.0, 30.0));

    let second = labels.labels(boxes, &ws, &vp);
    assert_eq!(second[0].id, first[0].id);

    labels.forget("a");
    let third = labels.labels(boxes, &ws, &vp);
    assert_ne!(third[0].id, first[0].id);
}

#[test]
fn label_text_is_scale_independent() {
    let ws = Rect::new(0.0, 0.0, 800.0, 600.0);
    let vp = Viewport { scroll_left: 0.0, scroll_top: 0.0, scale: 2.0, zoom: 10 };
    let mut labels = DebugLabels::new();
    let out = labels.labels([("a", Rect::new(100.0, 60.0, 40.0, 40.0))], &ws, &vp);
    assert_eq!(out[0].text, "50, 30");
    assert_eq!(out[0].position, Point::new(100.0, 60.0));
}
