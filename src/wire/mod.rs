//! The wire format: manifest, records, codecs and side-channels.
//!
//! A render pass encodes the attached container into a field manifest (the
//! ordered set of fields actually present) plus one compact record per event;
//! the client decodes them back into typed renderer rows. Icons and icon
//! alignments never ride in the record body; they travel as per-batch
//! side-channels keyed by event identifier.

/// Client-side decoding into renderer rows.
pub mod decode;
/// The shared per-field default table.
pub mod defaults;
/// Server-side batch encoding.
pub mod encode;
/// The self-describing field manifest.
pub mod manifest;
/// The narrow codec for user-created events.
pub mod new_event;
/// Wire records and their transport form.
pub mod record;
