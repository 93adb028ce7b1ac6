use std::fmt;

use crate::container::EventContainer;
use crate::container::model::ValueType;
use crate::foundation::core::PropertyId;
use crate::schema::registry::{SchemaRegistry, SemanticField};

/// One problem found while checking a container against a registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A required field's identifier is not declared by the container.
    MissingRequiredField {
        /// The field whose identifier is missing.
        field: SemanticField,
        /// The identifier that was looked up.
        identifier: PropertyId,
    },
    /// A declared property's type cannot hold the field's expected type.
    TypeMismatch {
        /// The field whose property is mistyped.
        field: SemanticField,
        /// The identifier that was looked up.
        identifier: PropertyId,
        /// The type the container declares.
        found: ValueType,
        /// The type the field expects.
        expected: ValueType,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField { field, identifier } => write!(
                f,
                "missing required field: {field} (property '{identifier}' not found in the container)"
            ),
            Self::TypeMismatch {
                field,
                identifier,
                found,
                expected,
            } => write!(
                f,
                "type mismatch for field {field} (property '{identifier}'): found {found}, expected {expected}"
            ),
        }
    }
}

/// Aggregate rejection of an event container, carrying every cause.
///
/// The container is rejected wholesale; the host is expected to log every
/// cause and either fix the container or leave the widget showing its
/// previous state.
#[derive(Clone, Debug)]
pub struct ContainerInvalid {
    violations: Vec<Violation>,
}

impl ContainerInvalid {
    /// Every violation found, in check order.
    pub fn causes(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ContainerInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found {} problem(s) in the event container",
            self.violations.len()
        )?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ContainerInvalid {}

/// Check `container` against `registry`, collecting every violation.
///
/// All rules are checked independently; the pass never short-circuits and
/// never mutates the container. Returns the empty list when the container is
/// acceptable.
pub fn violations(container: &dyn EventContainer, registry: &SchemaRegistry) -> Vec<Violation> {
    let mut found = Vec::new();
    let declared = container.property_ids();

    for field in SemanticField::ALL {
        let identifier = registry.resolve(field).clone();
        if !declared.contains(&identifier) {
            if field.is_required() {
                found.push(Violation::MissingRequiredField { field, identifier });
            }
            continue;
        }

        // Text fields accept any declared type: every value has a lossless
        // string rendering on the wire.
        let expected = field.expected_type();
        if expected == ValueType::Text {
            continue;
        }
        match container.declared_type(&identifier) {
            Some(declared_type) if declared_type.accepts(expected) => {}
            Some(declared_type) => found.push(Violation::TypeMismatch {
                field,
                identifier,
                found: declared_type,
                expected,
            }),
            // A declared identifier with no declared type behaves like a
            // dynamically typed column.
            None => {}
        }
    }

    found
}

/// Validate `container` against `registry`, rejecting on any violation.
pub fn validate(
    container: &dyn EventContainer,
    registry: &SchemaRegistry,
) -> Result<(), ContainerInvalid> {
    let violations = violations(container, registry);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ContainerInvalid { violations })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
