use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::*;
use crate::container::memory::{EventListContainer, TableContainer};
use crate::container::model::{TimelineEvent, ValueType};
use crate::foundation::core::{Alignment, Timestamp};
use crate::widget::options::Size;

fn holiday_container() -> EventListContainer {
    let mut container = EventListContainer::new();
    container.push("e1", TimelineEvent::new(Timestamp(1388880000000), "Holiday"));
    container.push(
        "e2",
        TimelineEvent::new(Timestamp(1389225600000), "Something fun")
            .with_end(Timestamp(1389744000000)),
    );
    container
}

#[test]
fn attach_validates_and_prepares_a_batch() {
    let mut timeline = Timeline::new();
    timeline
        .set_event_container(Box::new(holiday_container()))
        .unwrap();
    assert!(timeline.has_event_container());
    let batch = timeline.pending_batch().unwrap();
    assert_eq!(batch.records.len(), 2);
    assert!(timeline.take_repaint_request());
    assert!(!timeline.take_repaint_request());
}

#[test]
fn invalid_container_is_rejected_wholesale() {
    let mut timeline = Timeline::new();
    timeline
        .set_event_container(Box::new(holiday_container()))
        .unwrap();
    timeline.take_repaint_request();

    // Lacks CONTENT and declares EDITABLE as text.
    let bad = TableContainer::new(vec![
        ("START".into(), ValueType::Timestamp),
        ("EDITABLE".into(), ValueType::Text),
    ]);
    let err = timeline.set_event_container(Box::new(bad)).unwrap_err();
    assert_eq!(err.causes().len(), 2);

    // The previous attachment and its batch stay in place.
    assert!(timeline.has_event_container());
    assert_eq!(timeline.pending_batch().unwrap().records.len(), 2);
}

#[test]
fn paint_emits_the_flat_payload_and_clears_the_batch() {
    let mut timeline = Timeline::new();
    let mut container = EventListContainer::new();
    container.push(
        "e1",
        TimelineEvent::new(Timestamp(100), "iconic")
            .with_icon("flag.png".into())
            .with_icon_alignment(Alignment::BOTTOM_RIGHT),
    );
    timeline.set_event_container(Box::new(container)).unwrap();

    let payload = timeline.paint();
    assert_eq!(payload.events.len(), 1);
    assert!(matches!(
        payload.attributes.get(shared::FIELDS),
        Some(AttributeValue::List(_))
    ));
    assert_eq!(
        payload.attributes.get("icon-e1"),
        Some(&AttributeValue::Text("flag.png".into()))
    );
    assert_eq!(
        payload.attributes.get("iconpos-e1"),
        Some(&AttributeValue::Number(i64::from(
            Alignment::BOTTOM_RIGHT.bits()
        )))
    );
    assert_eq!(
        payload.attributes.get(shared::STYLE),
        Some(&AttributeValue::Text("box".into()))
    );
    assert_eq!(
        payload.attributes.get(shared::EDITABLE),
        Some(&AttributeValue::Flag(true))
    );
    assert_eq!(
        payload.attributes.get(shared::WIDTH),
        Some(&AttributeValue::Text("500".into()))
    );

    // Side-channel buffers are cleared by the pass, not retained.
    assert!(timeline.pending_batch().is_none());

    // The next pass re-encodes fresh from the container.
    let again = timeline.paint();
    assert_eq!(again.events, payload.events);
}

#[test]
fn paint_without_a_container_omits_event_state() {
    let mut timeline = Timeline::new();
    let payload = timeline.paint();
    assert!(payload.events.is_empty());
    assert!(!payload.attributes.contains_key(shared::FIELDS));
    assert!(
        payload
            .attributes
            .keys()
            .all(|k| !k.starts_with(shared::ICON_PREFIX))
    );
}

#[test]
fn viewport_bounds_paint_as_numbers() {
    let mut timeline = Timeline::new();
    let mut options = timeline.options().clone();
    options.viewport_start = Some(Timestamp(1388534400000));
    options.width = Size::percent(100.0);
    timeline.set_options(options);

    let payload = timeline.paint();
    assert_eq!(
        payload.attributes.get(shared::VIEWPORT_START),
        Some(&AttributeValue::Number(1388534400000))
    );
    assert!(!payload.attributes.contains_key(shared::VIEWPORT_END));
    assert_eq!(
        payload.attributes.get(shared::WIDTH_UNITS),
        Some(&AttributeValue::Text("%".into()))
    );
}

#[test]
fn dropped_rows_are_reported_to_the_host() {
    let mut container = TableContainer::new(vec![
        ("START".into(), ValueType::Timestamp),
        ("CONTENT".into(), ValueType::Text),
    ]);
    let mut values = BTreeMap::new();
    values.insert(
        "CONTENT".into(),
        crate::container::model::Value::Text("no start".into()),
    );
    container.push_row("broken", values);

    let mut timeline = Timeline::new();
    timeline.set_event_container(Box::new(container)).unwrap();
    assert_eq!(
        timeline.dropped_rows(),
        &[crate::foundation::core::EventId::from("broken")]
    );
}

#[test]
fn property_reassignment_invalidates_the_pending_batch() {
    let mut timeline = Timeline::new();
    timeline
        .set_event_container(Box::new(holiday_container()))
        .unwrap();
    timeline
        .set_property_id(SemanticField::Group, "bucket")
        .unwrap();
    assert!(timeline.pending_batch().is_none());
    assert!(timeline.take_repaint_request());

    let err = timeline.set_property_id(SemanticField::Start, "").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn client_variables_drive_handshake_and_listeners() {
    let mut timeline = Timeline::new();
    let seen: Rc<RefCell<Vec<TimelineEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    timeline.on_event_add(move |event| sink.borrow_mut().push(event.clone()));

    let mut variables = BTreeMap::new();
    variables.insert(
        shared::JS_INITIALIZED.to_owned(),
        ClientVariable::Flag(true),
    );
    // Out of lexical order on purpose; sequence order must win.
    variables.insert(
        "newevent10".to_owned(),
        ClientVariable::Cells(vec!["300".into(), "".into(), "third".into()]),
    );
    variables.insert(
        "newevent2".to_owned(),
        ClientVariable::Cells(vec!["200".into(), "250".into(), "second".into()]),
    );

    let decoded = timeline.apply_client_variables(&variables).unwrap();
    assert!(timeline.is_client_ready());
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].content, "second");
    assert_eq!(decoded[1].content, "third");
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[0].end, Some(Timestamp(250)));
}

#[test]
fn malformed_new_event_fails_the_pass() {
    let mut timeline = Timeline::new();
    let mut variables = BTreeMap::new();
    variables.insert(
        "newevent0".to_owned(),
        ClientVariable::Cells(vec!["not a time".into(), "".into(), "x".into()]),
    );
    assert!(timeline.apply_client_variables(&variables).is_err());
}
