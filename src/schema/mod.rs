//! Schema registry and event container validation.
//!
//! The registry maps each semantic field to the host-chosen property
//! identifier that carries it; the validator checks an incoming container
//! against that mapping before anything is encoded.

/// Semantic fields and the field-to-identifier registry.
pub mod registry;
/// Container validation against a registry.
pub mod validate;
