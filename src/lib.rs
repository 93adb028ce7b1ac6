//! Eventline is the validation and wire-codec core of an interactive
//! timeline widget.
//!
//! A server-side [`Timeline`] validates a host-supplied event collection
//! against a configurable [`SchemaRegistry`], compacts it into a
//! self-describing wire batch, and emits one flat [`PaintPayload`] per render
//! pass; a client-side [`TimelineView`] decodes payloads into typed
//! [`DataTable`] rows for an opaque canvas renderer and returns user-created
//! events over the narrow new-event path.
//!
//! - Describe the collection through the [`EventContainer`] capability trait
//! - Attach it to a [`Timeline`] and drive render passes with
//!   [`Timeline::paint`]
//! - Feed payloads to a [`TimelineView`] wired to your [`TimelineRenderer`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Host-facing event collection boundary.
pub mod container;
/// Schema registry and container validation.
pub mod schema;
/// Server-side widget and client-side view.
pub mod widget;
/// Manifest, records, codecs and side-channels.
pub mod wire;

pub use crate::foundation::core::{Alignment, EventId, IconRef, PropertyId, Timestamp};
pub use crate::foundation::error::{EventlineError, EventlineResult};

pub use crate::container::EventContainer;
pub use crate::container::memory::{EventListContainer, TableContainer};
pub use crate::container::model::{EventStyle, EventType, TimelineEvent, Value, ValueType};

pub use crate::schema::registry::{SchemaRegistry, SemanticField};
pub use crate::schema::validate::{ContainerInvalid, Violation, validate, violations};

pub use crate::wire::decode::{
    CellValue, Column, ColumnType, DataTable, IconUriResolver, IdentityResolver, decode,
};
pub use crate::wire::defaults::FieldDefaults;
pub use crate::wire::encode::{EncodedBatch, encode};
pub use crate::wire::manifest::{FieldManifest, IconPresence};
pub use crate::wire::new_event::{decode_new_event, encode_new_event};
pub use crate::wire::record::WireRecord;

pub use crate::widget::options::{Size, SizeUnit, TimelineOptions};
pub use crate::widget::timeline::{AttributeValue, ClientVariable, PaintPayload, Timeline};
pub use crate::widget::view::{RepaintOutcome, TimelineRenderer, TimelineView};
