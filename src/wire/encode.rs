use std::collections::BTreeMap;

use crate::container::EventContainer;
use crate::container::model::{Value, ValueType};
use crate::foundation::core::{Alignment, EventId, IconRef};
use crate::schema::registry::{SchemaRegistry, SemanticField};
use crate::wire::defaults::FieldDefaults;
use crate::wire::manifest::FieldManifest;
use crate::wire::record::WireRecord;

/// Everything one render pass produces for the transport layer.
///
/// Owned exclusively by the encoding side between renders; the widget drops
/// it after a successful transmission so stale rows are never re-sent.
#[derive(Clone, Debug)]
pub struct EncodedBatch {
    /// Fields present on the wire, in cell order.
    pub manifest: FieldManifest,
    /// One record per surviving event, in container order.
    pub records: Vec<WireRecord>,
    /// Icons for events in this batch, keyed by event identifier.
    pub icons: BTreeMap<EventId, IconRef>,
    /// Icon alignments for events in this batch.
    pub icon_alignments: BTreeMap<EventId, Alignment>,
    /// Identifiers of rows dropped for having a null start.
    pub dropped: Vec<EventId>,
}

/// Walk a validated container and produce its wire batch.
///
/// Rows with a null start are skipped (logged at warning level and reported
/// on the batch) so one bad row does not block the rest of the timeline.
/// Record count is therefore at most the container row count.
#[tracing::instrument(skip_all, fields(rows = container.row_count()))]
pub fn encode(
    container: &dyn EventContainer,
    registry: &SchemaRegistry,
    defaults: FieldDefaults,
) -> EncodedBatch {
    let (manifest, icon_presence) = FieldManifest::build(container, registry);

    let mut records = Vec::new();
    let mut icons = BTreeMap::new();
    let mut icon_alignments = BTreeMap::new();
    let mut dropped = Vec::new();

    for index in 0..container.row_count() {
        let id = container.row_id(index);

        let start = match container.value(index, registry.resolve(SemanticField::Start)) {
            Some(Value::Timestamp(ts)) => ts,
            _ => {
                tracing::warn!(event = %id, "event start is null, skipping row");
                dropped.push(id);
                continue;
            }
        };

        let mut record = WireRecord::new(id.as_str());
        record.push_cell(start.to_wire());
        // Start is already rendered as cell 1; every later manifest field
        // maps 1:1 onto the remaining cells.
        for field in &manifest.fields()[1..] {
            let value = container.value(index, registry.resolve(*field));
            record.push_cell(render_cell(field.expected_type(), value, defaults));
        }
        records.push(record);

        if icon_presence.icon {
            if let Some(Value::Icon(icon)) =
                container.value(index, registry.resolve(SemanticField::Icon))
            {
                icons.insert(id.clone(), icon);
            }
        }
        if icon_presence.alignment {
            if let Some(Value::Alignment(alignment)) =
                container.value(index, registry.resolve(SemanticField::IconAlignment))
            {
                icon_alignments.insert(id.clone(), alignment);
            }
        }
    }

    EncodedBatch {
        manifest,
        records,
        icons,
        icon_alignments,
        dropped,
    }
}

/// Render one value cell per its semantic type.
///
/// Null timestamps and text become the empty string; null booleans and types
/// fall back to the default table. Values stored in dynamically typed columns
/// render through their canonical string form.
fn render_cell(expected: ValueType, value: Option<Value>, defaults: FieldDefaults) -> String {
    match (expected, value) {
        (ValueType::Timestamp, Some(Value::Timestamp(ts))) => ts.to_wire(),
        (ValueType::Timestamp, None) => String::new(),
        (ValueType::Bool, Some(Value::Bool(b))) => b.to_string(),
        (ValueType::Bool, None) => defaults.editable.to_string(),
        (ValueType::EventType, Some(Value::EventType(t))) => t.wire_name().to_owned(),
        (ValueType::EventType, None) => defaults.event_type.wire_name().to_owned(),
        (_, Some(value)) => value.display_string(),
        (_, None) => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/encode.rs"]
mod tests;
