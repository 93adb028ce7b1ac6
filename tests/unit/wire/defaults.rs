use super::*;
use crate::container::model::EventType;

#[test]
fn default_table_matches_wire_fallbacks() {
    let defaults = FieldDefaults::default();
    assert_eq!(defaults.event_type, EventType::Range);
    assert!(!defaults.editable);
}
