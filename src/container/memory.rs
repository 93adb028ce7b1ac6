use std::collections::BTreeMap;

use crate::container::EventContainer;
use crate::container::model::{TimelineEvent, Value, ValueType};
use crate::foundation::core::{EventId, PropertyId};
use crate::schema::registry::SemanticField;

/// In-memory container over plain [`TimelineEvent`] rows.
///
/// Declares the default property identifier of every semantic field, typed
/// per the field's expectation, so the full optional field set participates
/// in the wire format.
#[derive(Clone, Debug, Default)]
pub struct EventListContainer {
    rows: Vec<(EventId, TimelineEvent)>,
}

impl EventListContainer {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row under a stable identifier.
    pub fn push(&mut self, id: impl Into<EventId>, event: TimelineEvent) {
        self.rows.push((id.into(), event));
    }

    /// Borrow a row's event by identifier.
    pub fn get(&self, id: &EventId) -> Option<&TimelineEvent> {
        self.rows.iter().find(|(rid, _)| rid == id).map(|(_, e)| e)
    }
}

impl EventContainer for EventListContainer {
    fn property_ids(&self) -> Vec<PropertyId> {
        SemanticField::ALL
            .into_iter()
            .map(|f| PropertyId::from(f.wire_name()))
            .collect()
    }

    fn declared_type(&self, id: &PropertyId) -> Option<ValueType> {
        SemanticField::from_wire_name(id.as_str()).map(|f| f.expected_type())
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_id(&self, index: usize) -> EventId {
        self.rows[index].0.clone()
    }

    fn value(&self, index: usize, id: &PropertyId) -> Option<Value> {
        let event = &self.rows[index].1;
        match SemanticField::from_wire_name(id.as_str())? {
            SemanticField::Start => Some(Value::Timestamp(event.start)),
            SemanticField::End => event.end.map(Value::Timestamp),
            SemanticField::Content => Some(Value::Text(event.content.clone())),
            SemanticField::Group => event.group.clone().map(Value::Text),
            SemanticField::ClassName => event.class_name.clone().map(Value::Text),
            SemanticField::Editable => event.editable.map(Value::Bool),
            SemanticField::Type => event.event_type.map(Value::EventType),
            SemanticField::Icon => event.icon.clone().map(Value::Icon),
            SemanticField::IconAlignment => event.icon_alignment.map(Value::Alignment),
        }
    }
}

/// In-memory container with a fully dynamic column shape.
///
/// Columns are declared up front with explicit identifiers and types; rows
/// hold values keyed by identifier. Useful for hosts whose collections are
/// not event-shaped, and throughout the test suite.
#[derive(Clone, Debug, Default)]
pub struct TableContainer {
    columns: Vec<(PropertyId, ValueType)>,
    rows: Vec<(EventId, BTreeMap<PropertyId, Value>)>,
}

impl TableContainer {
    /// Container with the given column declarations.
    pub fn new(columns: Vec<(PropertyId, ValueType)>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; values for undeclared columns are ignored on lookup.
    pub fn push_row(&mut self, id: impl Into<EventId>, values: BTreeMap<PropertyId, Value>) {
        self.rows.push((id.into(), values));
    }
}

impl EventContainer for TableContainer {
    fn property_ids(&self) -> Vec<PropertyId> {
        self.columns.iter().map(|(id, _)| id.clone()).collect()
    }

    fn declared_type(&self, id: &PropertyId) -> Option<ValueType> {
        self.columns
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, ty)| *ty)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_id(&self, index: usize) -> EventId {
        self.rows[index].0.clone()
    }

    fn value(&self, index: usize, id: &PropertyId) -> Option<Value> {
        if self.declared_type(id).is_none() {
            return None;
        }
        self.rows[index].1.get(id).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/memory.rs"]
mod tests;
