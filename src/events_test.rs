use super::*;

#[test]
fn flush_coalesces_a_burst() {
    let mut pending = PendingNotifications::default();
    pending.mark_scroll();
    pending.mark_scroll();
    pending.mark_zoom();
    let vp = Viewport { scroll_left: 3.0, scroll_top: 4.0, scale: 1.5, zoom: 5 };
    let events = pending.flush(&vp);
    assert_eq!(
        events,
        vec![Event::Scroll { scroll_left: 3.0, scroll_top: 4.0 }, Event::ZoomChange { zoom: 5, scale: 1.5 }]
    );
    assert!(pending.is_empty());
    assert!(pending.flush(&vp).is_empty());
}

#[test]
fn association_events_are_cancelable_viewport_events_are_not() {
    let scroll = Event::Scroll { scroll_left: 0.0, scroll_top: 0.0 };
    assert!(!scroll.cancelable());
    assert!(scroll.bubbles());
    assert!(Event::GeometryChange { key: "a".into() }.cancelable());
}

#[test]
fn serializes_with_dom_event_names() {
    let json = serde_json::to_value(Event::NodeMoved { key: "a".into(), x: 1.0, y: 2.0 });
    assert!(json.is_ok_and(|v| v["type"] == "moved" && v["key"] == "a"));

    let update = Event::AnchorAssociationUpdate {
        origin: "a".into(),
        detail: AssociationUpdate {
            source: AssociationRef { association_id: "e1".into(), direction: Tip::End },
            target: SlotEndpoint { id: "b".into(), point: Point::new(1.0, 2.0), slot: "west".into() },
        },
    };
    let json = serde_json::to_value(&update);
    assert!(json.is_ok_and(|v| {
        v["type"] == "anchorassociationupdate"
            && v["detail"]["source"]["associationId"] == "e1"
            && v["detail"]["source"]["direction"] == "end"
    }));
    assert_eq!(update.name(), "anchorassociationupdate");
}
