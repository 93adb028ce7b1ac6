use super::*;
use crate::container::model::TimelineEvent;

#[test]
fn grouped_events_emit_four_cells() {
    let event = TimelineEvent::new(Timestamp(100), "meeting")
        .with_end(Timestamp(200))
        .with_group("work");
    assert_eq!(
        encode_new_event(&event),
        vec!["100", "200", "meeting", "work"]
    );
}

#[test]
fn ungrouped_events_emit_three_cells() {
    let event = TimelineEvent::new(Timestamp(100), "meeting").with_end(Timestamp(200));
    assert_eq!(encode_new_event(&event), vec!["100", "200", "meeting"]);
}

#[test]
fn missing_end_is_an_empty_cell() {
    let event = TimelineEvent::new(Timestamp(100), "open ended");
    let cells = encode_new_event(&event);
    assert_eq!(cells[1], "");
    let back = decode_new_event(&cells).unwrap();
    assert_eq!(back.end, None);
}

#[test]
fn round_trip_preserves_the_reduced_field_set() {
    let event = TimelineEvent::new(Timestamp(1388880000000), "Holiday")
        .with_end(Timestamp(1389744000000))
        .with_group("fun");
    let back = decode_new_event(&encode_new_event(&event)).unwrap();
    assert_eq!(back, event);
}

#[test]
fn wrong_cell_counts_are_rejected() {
    let cells: Vec<String> = vec!["1".into(), "2".into()];
    let err = decode_new_event(&cells).unwrap_err();
    assert!(err.to_string().contains("expected 3 or 4"));

    let cells: Vec<String> = vec![
        "1".into(),
        "2".into(),
        "a".into(),
        "b".into(),
        "c".into(),
    ];
    assert!(decode_new_event(&cells).is_err());
}

#[test]
fn malformed_start_is_rejected() {
    let cells: Vec<String> = vec!["later".into(), "".into(), "x".into()];
    assert!(decode_new_event(&cells).is_err());
}
