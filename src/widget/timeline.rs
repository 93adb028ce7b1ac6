use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::container::EventContainer;
use crate::container::model::TimelineEvent;
use crate::foundation::core::{EventId, PropertyId};
use crate::foundation::error::EventlineResult;
use crate::schema::registry::{SchemaRegistry, SemanticField};
use crate::schema::validate::{ContainerInvalid, validate};
use crate::widget::options::TimelineOptions;
use crate::widget::shared;
use crate::wire::encode::{EncodedBatch, encode};
use crate::wire::new_event::decode_new_event;

/// One value in the flat paint attribute bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Free-form text.
    Text(String),
    /// Integer value (timestamps, alignment bitmasks).
    Number(i64),
    /// Boolean flag.
    Flag(bool),
    /// Ordered string list.
    List(Vec<String>),
}

/// Everything one render pass hands to the transport layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintPayload {
    /// Flat attribute bag: display options, manifest wire names and the
    /// `icon-<id>` / `iconpos-<id>` side-channels.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Wire records, one JSON cell array per surviving event.
    pub events: Vec<String>,
}

/// One variable received from the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClientVariable {
    /// Boolean variable (the readiness handshake).
    Flag(bool),
    /// Cell list variable (a new-event payload).
    Cells(Vec<String>),
}

/// Server-side timeline widget.
///
/// Owns the schema registry, the display options and the attached event
/// container, and produces one [`PaintPayload`] per render pass. The host
/// serializes container mutation against render passes; there is no internal
/// locking.
pub struct Timeline {
    registry: SchemaRegistry,
    options: TimelineOptions,
    container: Option<Box<dyn EventContainer>>,
    pending: Option<EncodedBatch>,
    dropped: Vec<EventId>,
    add_listeners: Vec<Box<dyn FnMut(&TimelineEvent)>>,
    repaint_requested: bool,
    client_ready: bool,
}

impl Timeline {
    /// Widget with default registry and options and no attached container.
    pub fn new() -> Self {
        Self {
            registry: SchemaRegistry::new(),
            options: TimelineOptions::default(),
            container: None,
            pending: None,
            dropped: Vec::new(),
            add_listeners: Vec::new(),
            repaint_requested: false,
            client_ready: false,
        }
    }

    /// The current display options.
    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    /// Replace the display options and request a repaint.
    pub fn set_options(&mut self, options: TimelineOptions) {
        self.options = options;
        self.pending = None;
        self.repaint_requested = true;
    }

    /// The current schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Reassign one semantic field's property identifier.
    ///
    /// Invalidates any previously generated manifest and requests a repaint.
    pub fn set_property_id(
        &mut self,
        field: SemanticField,
        id: impl Into<PropertyId>,
    ) -> EventlineResult<()> {
        self.registry.set_identifier(field, id)?;
        self.pending = None;
        self.repaint_requested = true;
        Ok(())
    }

    /// Attach an event container, validating it first.
    ///
    /// On rejection the previous attachment (and thus the previous rendering)
    /// stays in place and the aggregate error carries every cause.
    pub fn set_event_container(
        &mut self,
        container: Box<dyn EventContainer>,
    ) -> Result<(), ContainerInvalid> {
        validate(container.as_ref(), &self.registry)?;
        let batch = encode(container.as_ref(), &self.registry, self.options.defaults);
        self.dropped = batch.dropped.clone();
        self.pending = Some(batch);
        self.container = Some(container);
        self.repaint_requested = true;
        Ok(())
    }

    /// Detach the event container.
    pub fn clear_event_container(&mut self) {
        self.container = None;
        self.pending = None;
        self.dropped.clear();
        self.repaint_requested = true;
    }

    /// True when a container is attached.
    pub fn has_event_container(&self) -> bool {
        self.container.is_some()
    }

    /// The batch awaiting transmission, if any.
    pub fn pending_batch(&self) -> Option<&EncodedBatch> {
        self.pending.as_ref()
    }

    /// Identifiers of rows dropped by the most recent encode.
    pub fn dropped_rows(&self) -> &[EventId] {
        &self.dropped
    }

    /// Register a listener for user-created events.
    pub fn on_event_add(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) {
        self.add_listeners.push(Box::new(listener));
    }

    /// True when the client has requested a repaint since the last paint.
    ///
    /// Resets the flag; hosts poll this to drive render passes.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Run one render pass.
    ///
    /// Encodes fresh from the attached container (reusing the batch prepared
    /// at attach time if it has not been transmitted yet), emits the flat
    /// attribute bag plus the wire-record variable, and clears the buffered
    /// batch — each record batch is delivered at most once.
    pub fn paint(&mut self) -> PaintPayload {
        let mut attributes = BTreeMap::new();

        let opts = &self.options;
        attributes.insert(
            shared::WIDTH.to_owned(),
            AttributeValue::Text(opts.width.value.to_string()),
        );
        attributes.insert(
            shared::WIDTH_UNITS.to_owned(),
            AttributeValue::Text(opts.width.unit.symbol().to_owned()),
        );
        attributes.insert(
            shared::HEIGHT.to_owned(),
            AttributeValue::Text(opts.height.value.to_string()),
        );
        attributes.insert(
            shared::HEIGHT_UNITS.to_owned(),
            AttributeValue::Text(opts.height.unit.symbol().to_owned()),
        );
        attributes.insert(
            shared::IMMEDIATE.to_owned(),
            AttributeValue::Flag(opts.immediate),
        );
        attributes.insert(
            shared::EDITABLE.to_owned(),
            AttributeValue::Flag(opts.editable),
        );
        attributes.insert(
            shared::ANIMATE.to_owned(),
            AttributeValue::Flag(opts.animate),
        );
        attributes.insert(
            shared::STYLE.to_owned(),
            AttributeValue::Text(opts.style.wire_name().to_owned()),
        );
        attributes.insert(
            shared::AXIS_ON_TOP.to_owned(),
            AttributeValue::Flag(opts.axis_on_top),
        );
        attributes.insert(
            shared::NAVIGATION.to_owned(),
            AttributeValue::Flag(opts.show_navigation),
        );
        for (key, bound) in [
            (shared::VIEWPORT_START, opts.viewport_start),
            (shared::VIEWPORT_END, opts.viewport_end),
            (shared::TIMELINE_START, opts.timeline_start),
            (shared::TIMELINE_END, opts.timeline_end),
        ] {
            if let Some(ts) = bound {
                attributes.insert(key.to_owned(), AttributeValue::Number(ts.epoch_millis()));
            }
        }
        attributes.insert(
            shared::HAS_ADD_LISTENERS.to_owned(),
            AttributeValue::Flag(!self.add_listeners.is_empty()),
        );

        let mut events = Vec::new();
        if let Some(container) = &self.container {
            let batch = self.pending.take().unwrap_or_else(|| {
                encode(container.as_ref(), &self.registry, self.options.defaults)
            });
            self.dropped = batch.dropped.clone();

            attributes.insert(
                shared::FIELDS.to_owned(),
                AttributeValue::List(batch.manifest.wire_names()),
            );
            for (id, icon) in &batch.icons {
                attributes.insert(
                    format!("{}{id}", shared::ICON_PREFIX),
                    AttributeValue::Text(icon.uri().to_owned()),
                );
            }
            for (id, alignment) in &batch.icon_alignments {
                attributes.insert(
                    format!("{}{id}", shared::ICON_ALIGN_PREFIX),
                    AttributeValue::Number(i64::from(alignment.bits())),
                );
            }
            events = batch.records.iter().map(|r| r.to_wire_string()).collect();
        }

        self.repaint_requested = false;
        PaintPayload { attributes, events }
    }

    /// Consume variables received from the client.
    ///
    /// Handles the readiness handshake and any sequence-suffixed new-event
    /// payloads, in sequence order; each decoded event is surfaced to every
    /// add-event listener and returned. A malformed payload fails the whole
    /// pass.
    pub fn apply_client_variables(
        &mut self,
        variables: &BTreeMap<String, ClientVariable>,
    ) -> EventlineResult<Vec<TimelineEvent>> {
        if let Some(ClientVariable::Flag(ready)) = variables.get(shared::JS_INITIALIZED) {
            tracing::debug!(ready, "client rendering library initialized");
            self.client_ready = *ready;
        }

        let mut new_events: Vec<(usize, &Vec<String>)> = Vec::new();
        for (key, value) in variables {
            if let Some(suffix) = key.strip_prefix(shared::NEW_EVENT_PREFIX) {
                if let (Ok(seq), ClientVariable::Cells(cells)) = (suffix.parse::<usize>(), value) {
                    new_events.push((seq, cells));
                }
            }
        }
        new_events.sort_by_key(|(seq, _)| *seq);

        let mut decoded = Vec::with_capacity(new_events.len());
        for (_, cells) in new_events {
            let event = decode_new_event(cells)?;
            for listener in &mut self.add_listeners {
                listener(&event);
            }
            decoded.push(event);
        }
        Ok(decoded)
    }

    /// True once the client has reported its rendering library ready.
    pub fn is_client_ready(&self) -> bool {
        self.client_ready
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/timeline.rs"]
mod tests;
