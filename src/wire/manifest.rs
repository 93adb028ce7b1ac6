use crate::container::EventContainer;
use crate::foundation::error::{EventlineError, EventlineResult};
use crate::schema::registry::{SchemaRegistry, SemanticField};

/// Optional fields eligible for the record body, in wire priority order.
///
/// The order is significant and stable: it is the only thing telling the
/// decoder which record cell means what.
const OPTIONAL_PRIORITY: [SemanticField; 5] = [
    SemanticField::End,
    SemanticField::Group,
    SemanticField::ClassName,
    SemanticField::Editable,
    SemanticField::Type,
];

/// Ordered list of semantic fields actually present on the wire.
///
/// Always starts `[Start, Content]`; optional fields follow in the fixed
/// priority order, each present only when the container declares its
/// identifier. Icon fields never appear here; they ride the side-channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldManifest {
    fields: Vec<SemanticField>,
}

/// Whether the icon side-channels need populating for a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconPresence {
    /// The container declares the icon identifier.
    pub icon: bool,
    /// The container declares the icon alignment identifier.
    pub alignment: bool,
}

impl FieldManifest {
    /// Build the manifest and icon flags for one container.
    pub fn build(
        container: &dyn EventContainer,
        registry: &SchemaRegistry,
    ) -> (Self, IconPresence) {
        let mut fields = vec![SemanticField::Start, SemanticField::Content];
        for field in OPTIONAL_PRIORITY {
            if container.has_property(registry.resolve(field)) {
                fields.push(field);
            }
        }
        let presence = IconPresence {
            icon: container.has_property(registry.resolve(SemanticField::Icon)),
            alignment: container.has_property(registry.resolve(SemanticField::IconAlignment)),
        };
        (Self { fields }, presence)
    }

    /// Parse wire names strictly.
    ///
    /// An unrecognized or body-ineligible name fails the pass with a decode
    /// error naming the offending field, rather than silently misaligning
    /// every subsequent column.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> EventlineResult<Self> {
        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let field = SemanticField::from_wire_name(name)
                .filter(|f| !matches!(f, SemanticField::Icon | SemanticField::IconAlignment))
                .ok_or_else(|| {
                    EventlineError::decode(format!("unknown field '{name}' in manifest"))
                })?;
            fields.push(field);
        }
        Ok(Self { fields })
    }

    /// The fields, in wire order.
    pub fn fields(&self) -> &[SemanticField] {
        &self.fields
    }

    /// Wire names, in wire order.
    pub fn wire_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.wire_name().to_owned()).collect()
    }

    /// Number of fields (and of value cells per record).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the manifest carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/manifest.rs"]
mod tests;
