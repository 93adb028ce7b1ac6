use super::*;
use crate::foundation::core::{Alignment, IconRef, Timestamp};

#[test]
fn event_type_wire_names() {
    assert_eq!(EventType::Box.wire_name(), "box");
    assert_eq!(EventType::Range.wire_name(), "range");
    assert_eq!(EventType::Dot.wire_name(), "dot");
    assert_eq!(EventType::parse_wire("dot"), Some(EventType::Dot));
    assert_eq!(EventType::parse_wire("blob"), None);
}

#[test]
fn event_type_default_is_range() {
    assert_eq!(EventType::default(), EventType::Range);
}

#[test]
fn event_style_default_is_box() {
    assert_eq!(EventStyle::default(), EventStyle::Box);
    assert_eq!(EventStyle::Dot.wire_name(), "dot");
}

#[test]
fn value_type_assignability() {
    assert!(ValueType::Any.accepts(ValueType::Timestamp));
    assert!(ValueType::Any.accepts(ValueType::Bool));
    assert!(ValueType::Timestamp.accepts(ValueType::Timestamp));
    assert!(!ValueType::Text.accepts(ValueType::Bool));
    assert!(!ValueType::Bool.accepts(ValueType::Any));
}

#[test]
fn value_display_strings() {
    assert_eq!(
        Value::Timestamp(Timestamp(42)).display_string(),
        "42"
    );
    assert_eq!(Value::Text("hi".into()).display_string(), "hi");
    assert_eq!(Value::Bool(true).display_string(), "true");
    assert_eq!(Value::EventType(EventType::Box).display_string(), "box");
    assert_eq!(Value::Icon(IconRef::from("a.png")).display_string(), "a.png");
    assert_eq!(
        Value::Alignment(Alignment::TOP_CENTER).display_string(),
        Alignment::TOP_CENTER.bits().to_string()
    );
}

#[test]
fn event_builder_sets_optional_fields() {
    let event = TimelineEvent::new(Timestamp(1), "party")
        .with_end(Timestamp(2))
        .with_group("fun")
        .with_class_name("red")
        .with_editable(true)
        .with_event_type(EventType::Dot)
        .with_icon(IconRef::from("a.png"))
        .with_icon_alignment(Alignment::BOTTOM_RIGHT);

    assert_eq!(event.start, Timestamp(1));
    assert_eq!(event.end, Some(Timestamp(2)));
    assert_eq!(event.content, "party");
    assert_eq!(event.group.as_deref(), Some("fun"));
    assert_eq!(event.class_name.as_deref(), Some("red"));
    assert_eq!(event.editable, Some(true));
    assert_eq!(event.event_type, Some(EventType::Dot));
    assert_eq!(event.icon, Some(IconRef::from("a.png")));
    assert_eq!(event.icon_alignment, Some(Alignment::BOTTOM_RIGHT));
}

#[test]
fn event_serde_round_trip() {
    let event = TimelineEvent::new(Timestamp(1388880000000), "Holiday").with_end(Timestamp(2));
    let json = serde_json::to_string(&event).unwrap();
    let back: TimelineEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
