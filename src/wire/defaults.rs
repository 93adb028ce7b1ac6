use serde::{Deserialize, Serialize};

use crate::container::model::EventType;

/// Fallback values consulted when a per-event value is absent.
///
/// Both codec sides read this one table instead of duplicating fallback
/// branches: a null type cell encodes and decodes as `event_type`, a null
/// editable cell as `editable`. Null timestamps and text stay empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefaults {
    /// Shape assumed for events without a type value.
    pub event_type: EventType,
    /// Editability assumed for events without an editable value.
    pub editable: bool,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            event_type: EventType::Range,
            editable: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/defaults.rs"]
mod tests;
