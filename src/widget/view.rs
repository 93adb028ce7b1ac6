use std::collections::BTreeMap;

use crate::container::model::TimelineEvent;
use crate::foundation::core::{Alignment, EventId, IconRef};
use crate::foundation::error::{EventlineError, EventlineResult};
use crate::widget::shared;
use crate::widget::timeline::{AttributeValue, PaintPayload};
use crate::wire::decode::{DataTable, IconUriResolver, IdentityResolver, decode};
use crate::wire::new_event::encode_new_event;

/// The opaque canvas rendering engine behind the client view.
///
/// The view only hands it the decoded table and the pass-through option
/// attributes; layout and drawing are entirely its business.
pub trait TimelineRenderer {
    /// Redraw with the current rows and options.
    fn redraw(&mut self, table: &DataTable, attributes: &BTreeMap<String, AttributeValue>);
}

/// What happened to a repaint request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepaintOutcome {
    /// The renderer was redrawn synchronously.
    Fired,
    /// The library-ready handshake is still pending; the request was queued.
    Deferred,
}

enum ViewState {
    Uninitialized { repaint_queued: bool },
    Ready,
}

/// Client-side timeline view.
///
/// Decodes incoming paint payloads into renderer rows and gates redraws on
/// the one-time external library-ready signal: repaint requests made while
/// uninitialized are deferred and coalesced, and exactly one repaint fires
/// when the signal arrives.
pub struct TimelineView {
    state: ViewState,
    table: DataTable,
    attributes: BTreeMap<String, AttributeValue>,
    resolver: Box<dyn IconUriResolver>,
    next_event_seq: usize,
}

impl TimelineView {
    /// View resolving icon references as literal URIs.
    pub fn new() -> Self {
        Self::with_resolver(Box::new(IdentityResolver))
    }

    /// View with a host-supplied icon URI resolver.
    pub fn with_resolver(resolver: Box<dyn IconUriResolver>) -> Self {
        Self {
            state: ViewState::Uninitialized {
                repaint_queued: false,
            },
            table: DataTable::default(),
            attributes: BTreeMap::new(),
            resolver,
            next_event_seq: 0,
        }
    }

    /// True once the library-ready signal has arrived.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ViewState::Ready)
    }

    /// The most recently decoded rows.
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// Receive the one-time external library-ready signal.
    ///
    /// Transitions `Uninitialized -> Ready` exactly once and replays the
    /// queued repaint, if any. Returns `true` when a deferred repaint fired;
    /// later calls are no-ops.
    pub fn library_ready(&mut self, renderer: &mut dyn TimelineRenderer) -> bool {
        match self.state {
            ViewState::Uninitialized { repaint_queued } => {
                tracing::debug!("rendering library ready");
                self.state = ViewState::Ready;
                if repaint_queued {
                    renderer.redraw(&self.table, &self.attributes);
                }
                repaint_queued
            }
            ViewState::Ready => false,
        }
    }

    /// Redraw now, or queue a single coalesced repaint until ready.
    pub fn request_repaint(&mut self, renderer: &mut dyn TimelineRenderer) -> RepaintOutcome {
        match &mut self.state {
            ViewState::Uninitialized { repaint_queued } => {
                *repaint_queued = true;
                RepaintOutcome::Deferred
            }
            ViewState::Ready => {
                renderer.redraw(&self.table, &self.attributes);
                RepaintOutcome::Fired
            }
        }
    }

    /// Apply one server update.
    ///
    /// Decodes the wire records (when the payload carries any) into the
    /// renderer table, stores the pass-through attributes, and requests a
    /// repaint. A decode failure fails the pass and leaves the previous
    /// table and rendering in place.
    pub fn apply_update(
        &mut self,
        payload: &PaintPayload,
        renderer: &mut dyn TimelineRenderer,
    ) -> EventlineResult<RepaintOutcome> {
        if !payload.events.is_empty() {
            let fields = match payload.attributes.get(shared::FIELDS) {
                Some(AttributeValue::List(fields)) => fields,
                _ => {
                    return Err(EventlineError::decode(
                        "update carries events but no field list",
                    ));
                }
            };
            let (icons, icon_alignments) = side_channels(&payload.attributes);
            self.table = decode(
                fields,
                &payload.events,
                &icons,
                &icon_alignments,
                self.resolver.as_ref(),
            )?;
        }
        self.attributes = payload.attributes.clone();
        Ok(self.request_repaint(renderer))
    }

    /// Report a user-created event for the return transport.
    ///
    /// Yields the sequence-suffixed variable name and the new-event cells.
    pub fn report_added_event(&mut self, event: &TimelineEvent) -> (String, Vec<String>) {
        let name = format!("{}{}", shared::NEW_EVENT_PREFIX, self.next_event_seq);
        self.next_event_seq += 1;
        (name, encode_new_event(event))
    }
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the icon side-channels out of the flat attribute bag.
fn side_channels(
    attributes: &BTreeMap<String, AttributeValue>,
) -> (BTreeMap<EventId, IconRef>, BTreeMap<EventId, Alignment>) {
    let mut icons = BTreeMap::new();
    let mut alignments = BTreeMap::new();
    for (key, value) in attributes {
        if let Some(id) = key.strip_prefix(shared::ICON_PREFIX) {
            if let AttributeValue::Text(uri) = value {
                icons.insert(EventId::from(id), IconRef::from(uri.as_str()));
            }
        } else if let Some(id) = key.strip_prefix(shared::ICON_ALIGN_PREFIX) {
            if let AttributeValue::Number(bits) = value {
                alignments.insert(EventId::from(id), Alignment::from_bits(*bits as u8));
            }
        }
    }
    (icons, alignments)
}

#[cfg(test)]
#[path = "../../tests/unit/widget/view.rs"]
mod tests;
