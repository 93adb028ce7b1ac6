use std::collections::BTreeMap;

use super::*;
use crate::container::memory::EventListContainer;
use crate::container::model::TimelineEvent;
use crate::foundation::core::Timestamp;
use crate::widget::timeline::Timeline;

#[derive(Default)]
struct Recorder {
    redraws: usize,
    last_row_count: usize,
}

impl TimelineRenderer for Recorder {
    fn redraw(&mut self, table: &DataTable, _attributes: &BTreeMap<String, AttributeValue>) {
        self.redraws += 1;
        self.last_row_count = table.row_count();
    }
}

fn server_payload() -> PaintPayload {
    let mut container = EventListContainer::new();
    container.push("e1", TimelineEvent::new(Timestamp(100), "one"));
    container.push("e2", TimelineEvent::new(Timestamp(200), "two"));
    let mut timeline = Timeline::new();
    timeline.set_event_container(Box::new(container)).unwrap();
    timeline.paint()
}

#[test]
fn repaints_before_readiness_are_deferred_and_coalesced() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();

    assert_eq!(
        view.request_repaint(&mut renderer),
        RepaintOutcome::Deferred
    );
    assert_eq!(
        view.request_repaint(&mut renderer),
        RepaintOutcome::Deferred
    );
    assert_eq!(renderer.redraws, 0);

    // Exactly one coalesced repaint fires on the ready signal.
    assert!(view.library_ready(&mut renderer));
    assert_eq!(renderer.redraws, 1);

    // The transition happens once; a second signal is a no-op.
    assert!(!view.library_ready(&mut renderer));
    assert_eq!(renderer.redraws, 1);
}

#[test]
fn readiness_without_a_queued_repaint_stays_quiet() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();
    assert!(!view.library_ready(&mut renderer));
    assert_eq!(renderer.redraws, 0);
    assert!(view.is_ready());

    assert_eq!(view.request_repaint(&mut renderer), RepaintOutcome::Fired);
    assert_eq!(renderer.redraws, 1);
}

#[test]
fn updates_decode_into_renderer_rows() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();
    view.library_ready(&mut renderer);

    let outcome = view.apply_update(&server_payload(), &mut renderer).unwrap();
    assert_eq!(outcome, RepaintOutcome::Fired);
    assert_eq!(renderer.redraws, 1);
    assert_eq!(renderer.last_row_count, 2);
    assert_eq!(view.table().row_count(), 2);
}

#[test]
fn updates_before_readiness_defer_the_redraw() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();

    let outcome = view.apply_update(&server_payload(), &mut renderer).unwrap();
    assert_eq!(outcome, RepaintOutcome::Deferred);
    assert_eq!(renderer.redraws, 0);
    // The rows are already decoded and waiting.
    assert_eq!(view.table().row_count(), 2);

    assert!(view.library_ready(&mut renderer));
    assert_eq!(renderer.redraws, 1);
    assert_eq!(renderer.last_row_count, 2);
}

#[test]
fn events_without_a_field_list_fail_the_pass() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();
    view.library_ready(&mut renderer);

    let mut payload = server_payload();
    payload.attributes.remove(crate::widget::shared::FIELDS);
    let err = view.apply_update(&payload, &mut renderer).unwrap_err();
    assert!(err.to_string().contains("no field list"));
    // The previous (empty) table and rendering stay in place.
    assert_eq!(view.table().row_count(), 0);
    assert_eq!(renderer.redraws, 0);
}

#[test]
fn empty_updates_keep_the_previous_rows() {
    let mut view = TimelineView::new();
    let mut renderer = Recorder::default();
    view.library_ready(&mut renderer);
    view.apply_update(&server_payload(), &mut renderer).unwrap();

    let empty = PaintPayload::default();
    view.apply_update(&empty, &mut renderer).unwrap();
    assert_eq!(view.table().row_count(), 2);
    assert_eq!(renderer.redraws, 2);
}

#[test]
fn added_events_get_sequence_suffixed_variables() {
    let mut view = TimelineView::new();
    let event = TimelineEvent::new(Timestamp(100), "fresh").with_end(Timestamp(150));

    let (name, cells) = view.report_added_event(&event);
    assert_eq!(name, "newevent0");
    assert_eq!(cells, vec!["100", "150", "fresh"]);

    let (name, _) = view.report_added_event(&event);
    assert_eq!(name, "newevent1");
}
