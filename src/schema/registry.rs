use std::collections::BTreeMap;
use std::fmt;

use crate::container::EventContainer;
use crate::container::model::ValueType;
use crate::foundation::core::PropertyId;
use crate::foundation::error::{EventlineError, EventlineResult};

/// One of the fixed set of event attributes the widget understands.
///
/// Start and Content are required on every container; the rest are optional.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SemanticField {
    /// Event start instant. Required, non-null.
    Start,
    /// Event end instant.
    End,
    /// Display content. Required, may be empty.
    Content,
    /// Group label.
    Group,
    /// CSS class name.
    ClassName,
    /// Per-event editability.
    Editable,
    /// Visual shape.
    Type,
    /// Icon resource. Travels as a side-channel, never in the record body.
    Icon,
    /// Icon placement. Side-channel only, like [`SemanticField::Icon`].
    IconAlignment,
}

impl SemanticField {
    /// Every semantic field, in declaration order.
    pub const ALL: [SemanticField; 9] = [
        Self::Start,
        Self::End,
        Self::Content,
        Self::Group,
        Self::ClassName,
        Self::Editable,
        Self::Type,
        Self::Icon,
        Self::IconAlignment,
    ];

    /// Stable wire name, also the default property identifier.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::End => "END",
            Self::Content => "CONTENT",
            Self::Group => "GROUP",
            Self::ClassName => "CLASSNAME",
            Self::Editable => "EDITABLE",
            Self::Type => "TYPE",
            Self::Icon => "ICON",
            Self::IconAlignment => "ICON_ALIGNMENT",
        }
    }

    /// Parse a wire name back to its field.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    /// Value type the field expects in a container.
    pub const fn expected_type(self) -> ValueType {
        match self {
            Self::Start | Self::End => ValueType::Timestamp,
            Self::Content | Self::Group | Self::ClassName => ValueType::Text,
            Self::Editable => ValueType::Bool,
            Self::Type => ValueType::EventType,
            Self::Icon => ValueType::Icon,
            Self::IconAlignment => ValueType::Alignment,
        }
    }

    /// True for the two fields every container must declare.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Start | Self::Content)
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Mapping from semantic field to the property identifier that carries it.
///
/// Every field always has exactly one identifier (defaulting to its wire
/// name); only the identifier's *presence in the container* is optional.
/// Reassigning an identifier invalidates any previously generated manifest,
/// so the widget regenerates on the next render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaRegistry {
    ids: BTreeMap<SemanticField, PropertyId>,
}

impl SchemaRegistry {
    /// Registry with every identifier at its default (the field wire name).
    pub fn new() -> Self {
        Self {
            ids: SemanticField::ALL
                .into_iter()
                .map(|f| (f, PropertyId::from(f.wire_name())))
                .collect(),
        }
    }

    /// The property identifier currently assigned to `field`.
    pub fn resolve(&self, field: SemanticField) -> &PropertyId {
        &self.ids[&field]
    }

    /// Reassign the property identifier for `field`.
    ///
    /// Fails fast with a configuration error when the identifier is empty or
    /// already assigned to a different field.
    pub fn set_identifier(
        &mut self,
        field: SemanticField,
        id: impl Into<PropertyId>,
    ) -> EventlineResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(EventlineError::configuration(format!(
                "property identifier for {field} must not be empty"
            )));
        }
        if let Some((other, _)) = self
            .ids
            .iter()
            .find(|(other, assigned)| **other != field && **assigned == id)
        {
            return Err(EventlineError::configuration(format!(
                "property identifier '{id}' for {field} is already assigned to {other}"
            )));
        }
        self.ids.insert(field, id);
        Ok(())
    }

    /// Which semantic fields have their identifier declared by `container`.
    pub fn fields_present(&self, container: &dyn EventContainer) -> Vec<SemanticField> {
        let declared = container.property_ids();
        SemanticField::ALL
            .into_iter()
            .filter(|f| declared.contains(self.resolve(*f)))
            .collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/registry.rs"]
mod tests;
