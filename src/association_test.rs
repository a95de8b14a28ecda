use super::*;

fn endpoint(id: &str, x: f64, y: f64, slot: &str) -> SlotEndpoint {
    SlotEndpoint { id: id.into(), point: Point::new(x, y), slot: slot.into() }
}

#[test]
fn starts_idle() {
    let anchors = AssociationAnchors::new();
    assert!(!anchors.is_drawing());
    assert!(anchors.preview().is_none());
}

#[test]
fn begin_create_starts_a_zero_length_preview() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_create(endpoint("a", 10.0, 20.0, "east"));
    assert!(anchors.is_drawing());
    assert_eq!(
        anchors.preview(),
        Some(PreviewLine { from: Point::new(10.0, 20.0), to: Point::new(10.0, 20.0) })
    );
}

#[test]
fn drag_moves_only_the_free_end() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_create(endpoint("a", 10.0, 20.0, "east"));
    assert!(anchors.drag(Point::new(50.0, 60.0)));
    assert_eq!(anchors.preview().map(|p| p.from), Some(Point::new(10.0, 20.0)));
    assert_eq!(anchors.preview().map(|p| p.to), Some(Point::new(50.0, 60.0)));
}

#[test]
fn drag_while_idle_is_ignored() {
    let mut anchors = AssociationAnchors::new();
    assert!(!anchors.drag(Point::new(1.0, 1.0)));
}

#[test]
fn finish_over_slot_dispatches_create_from_source() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_create(endpoint("a", 10.0, 20.0, "east"));
    let outcome = anchors.finish(Some(endpoint("b", 90.0, 20.0, "west")));
    let DrawOutcome::Dispatched(Event::AnchorAssociationCreate { origin, detail }) = outcome else {
        panic!("expected create event, got {outcome:?}");
    };
    assert_eq!(origin, "a");
    assert_eq!(detail.source, endpoint("a", 10.0, 20.0, "east"));
    assert_eq!(detail.target, endpoint("b", 90.0, 20.0, "west"));
    assert!(!anchors.is_drawing());
    assert!(anchors.preview().is_none());
}

#[test]
fn finish_off_slot_cancels_silently() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_create(endpoint("a", 10.0, 20.0, "east"));
    assert_eq!(anchors.finish(None), DrawOutcome::Cancelled { association_id: None });
    assert!(!anchors.is_drawing());
    assert!(anchors.preview().is_none());
}

#[test]
fn update_dispatches_from_association_source() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_update("e1".into(), Tip::End, "a".into(), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert_eq!(anchors.updating(), Some("e1"));
    anchors.drag(Point::new(120.0, 40.0));
    let outcome = anchors.finish(Some(endpoint("c", 120.0, 40.0, "north")));
    let DrawOutcome::Dispatched(Event::AnchorAssociationUpdate { origin, detail }) = outcome else {
        panic!("expected update event, got {outcome:?}");
    };
    assert_eq!(origin, "a");
    assert_eq!(detail.source, AssociationRef { association_id: "e1".into(), direction: Tip::End });
    assert_eq!(detail.target.id, "c");
}

#[test]
fn escape_cancels_update_and_reports_association() {
    let mut anchors = AssociationAnchors::new();
    anchors.begin_update("e1".into(), Tip::Start, "a".into(), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert_eq!(anchors.cancel(), DrawOutcome::Cancelled { association_id: Some("e1".into()) });
    assert!(!anchors.is_drawing());
    assert!(anchors.preview().is_none());
    assert_eq!(anchors.cancel(), DrawOutcome::Idle);
}

#[test]
fn finish_while_idle_does_nothing() {
    let mut anchors = AssociationAnchors::new();
    assert_eq!(anchors.finish(Some(endpoint("b", 0.0, 0.0, "west"))), DrawOutcome::Idle);
}
