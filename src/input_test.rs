use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.command());
}

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.command());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Modifiers::default() }.command());
}

// =============================================================
// Key / Target
// =============================================================

#[test]
fn escape_key_is_recognized() {
    assert!(Key("Escape".into()).is_escape());
    assert!(Key("Esc".into()).is_escape());
    assert!(!Key("Enter".into()).is_escape());
}

#[test]
fn target_node_key() {
    assert_eq!(Target::Node { key: "a".into() }.node_key(), Some("a"));
    assert_eq!(Target::Slot { key: "b".into(), slot: "east".into() }.node_key(), Some("b"));
    assert_eq!(Target::Canvas.node_key(), None);
    assert_eq!(Target::default(), Target::Outside);
}

// =============================================================
// Input wire form
// =============================================================

#[test]
fn pointer_down_defaults_optional_fields() {
    let input: Input = serde_json::from_str(r#"{"type":"pointerDown","x":1,"y":2}"#).unwrap();
    assert_eq!(
        input,
        Input::PointerDown {
            x: 1.0,
            y: 2.0,
            button: Button::Primary,
            modifiers: Modifiers::default(),
            target: Target::Outside,
        }
    );
}

#[test]
fn edge_handle_target_uses_camel_case() {
    let input: Input = serde_json::from_str(
        r#"{"type":"pointerDown","x":0,"y":0,"target":{"kind":"edgeHandle","edgeId":"e1","tip":"end"}}"#,
    )
    .unwrap();
    let Input::PointerDown { target, .. } = input else {
        panic!("expected pointer down");
    };
    assert_eq!(target, Target::EdgeHandle { edge_id: "e1".into(), tip: Tip::End });
}

#[test]
fn key_down_carries_key_name() {
    let input: Input = serde_json::from_str(r#"{"type":"keyDown","key":"Escape"}"#).unwrap();
    assert_eq!(input, Input::KeyDown { key: Key("Escape".into()), modifiers: Modifiers::default() });
}

#[test]
fn unit_variants_parse() {
    let input: Input = serde_json::from_str(r#"{"type":"flush"}"#).unwrap();
    assert_eq!(input, Input::Flush);
    let input: Input = serde_json::from_str(r#"{"type":"deselectAll"}"#).unwrap();
    assert_eq!(input, Input::DeselectAll);
}

#[test]
fn align_parses_operation_name() {
    let input: Input = serde_json::from_str(r#"{"type":"align","op":"verticalTop"}"#).unwrap();
    assert_eq!(input, Input::Align { op: Alignment::VerticalTop });
}

#[test]
fn unknown_input_type_is_rejected() {
    assert!(serde_json::from_str::<Input>(r#"{"type":"explode"}"#).is_err());
}
