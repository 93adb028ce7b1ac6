//! Host-facing event collection boundary.
//!
//! The core never assumes a concrete collection type; it consumes any indexed,
//! ordered collection through the [`EventContainer`] capability trait. Two
//! implementations ship with the crate: [`memory::EventListContainer`] for
//! hosts that hold plain [`model::TimelineEvent`] rows, and
//! [`memory::TableContainer`] for fully dynamic column shapes.

/// Shipped in-memory containers.
pub mod memory;
/// Domain event model and cell values.
pub mod model;

use crate::foundation::core::{EventId, PropertyId};
use crate::container::model::{Value, ValueType};

/// Indexed, ordered event collection supplied by the host.
///
/// Lookups are by property identifier and row index; rows carry stable
/// host-assigned identifiers. Implementations are never mutated by the core.
pub trait EventContainer {
    /// Property identifiers declared by the collection.
    fn property_ids(&self) -> Vec<PropertyId>;

    /// Declared value type of one property, `None` when undeclared.
    fn declared_type(&self, id: &PropertyId) -> Option<ValueType>;

    /// Number of rows, iterated in native order.
    fn row_count(&self) -> usize;

    /// Stable identifier of the row at `index`.
    fn row_id(&self, index: usize) -> EventId;

    /// Value of one property on one row, `None` when null.
    fn value(&self, index: usize, id: &PropertyId) -> Option<Value>;

    /// True when a property identifier is declared.
    fn has_property(&self, id: &PropertyId) -> bool {
        self.property_ids().iter().any(|p| p == id)
    }
}
