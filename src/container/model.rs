use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Alignment, IconRef, Timestamp};

/// Visual shape of one timeline event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A box with a vertical line down to the axis.
    Box,
    /// A bar spanning from start to end.
    #[default]
    Range,
    /// A dot on the axis.
    Dot,
}

impl EventType {
    /// Lower-case wire form consumed by the renderer.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Range => "range",
            Self::Dot => "dot",
        }
    }

    /// Parse the lower-case wire form.
    pub fn parse_wire(cell: &str) -> Option<Self> {
        match cell {
            "box" => Some(Self::Box),
            "range" => Some(Self::Range),
            "dot" => Some(Self::Dot),
            _ => None,
        }
    }
}

/// Global default style for events without a per-event type.
///
/// Close cousin of [`EventType`] but without a range option; this is the
/// widget-level `style` display option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStyle {
    /// Boxes with vertical lines down to the axis.
    #[default]
    Box,
    /// Dots on the axis.
    Dot,
}

impl EventStyle {
    /// Lower-case wire form.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Dot => "dot",
        }
    }
}

/// Declared type of one container property.
///
/// `Any` is the escape hatch for dynamically typed host columns; it is
/// assignable to every expected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Epoch-millisecond instant.
    Timestamp,
    /// Free text.
    Text,
    /// Boolean flag.
    Bool,
    /// Enumerated event type.
    EventType,
    /// Icon resource reference.
    Icon,
    /// Icon alignment.
    Alignment,
    /// Dynamically typed column.
    Any,
}

impl ValueType {
    /// True when a column declared as `self` can hold values of `expected`.
    pub fn accepts(self, expected: ValueType) -> bool {
        self == Self::Any || self == expected
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timestamp => "timestamp",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::EventType => "event type",
            Self::Icon => "icon",
            Self::Alignment => "alignment",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

/// One typed cell value read from a container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Epoch-millisecond instant.
    Timestamp(Timestamp),
    /// Free text.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Enumerated event type.
    EventType(EventType),
    /// Icon resource reference.
    Icon(IconRef),
    /// Icon alignment.
    Alignment(Alignment),
}

impl Value {
    /// The type this value inhabits.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Timestamp(_) => ValueType::Timestamp,
            Self::Text(_) => ValueType::Text,
            Self::Bool(_) => ValueType::Bool,
            Self::EventType(_) => ValueType::EventType,
            Self::Icon(_) => ValueType::Icon,
            Self::Alignment(_) => ValueType::Alignment,
        }
    }

    /// Canonical string rendering, used for text cells and as the fallback
    /// for values stored in dynamically typed columns.
    pub fn display_string(&self) -> String {
        match self {
            Self::Timestamp(ts) => ts.to_wire(),
            Self::Text(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::EventType(t) => t.wire_name().to_owned(),
            Self::Icon(icon) => icon.uri().to_owned(),
            Self::Alignment(a) => a.bits().to_string(),
        }
    }
}

/// A single event on the timeline, as the host models it.
///
/// Only `start` and `content` are required; everything else is optional and
/// participates in the wire format only when the attached container declares
/// the matching property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Start instant. Events without one never reach the wire.
    pub start: Timestamp,
    /// Optional end instant.
    #[serde(default)]
    pub end: Option<Timestamp>,
    /// Display content, plain text or markup. May be empty.
    pub content: String,
    /// Optional group label; grouped events share a line.
    #[serde(default)]
    pub group: Option<String>,
    /// Optional CSS class name for custom styling.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Optional per-event editability override.
    #[serde(default)]
    pub editable: Option<bool>,
    /// Optional visual shape override.
    #[serde(default)]
    pub event_type: Option<EventType>,
    /// Optional icon shown with the content.
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Optional icon placement.
    #[serde(default)]
    pub icon_alignment: Option<Alignment>,
}

impl TimelineEvent {
    /// Create an event with the two required fields.
    pub fn new(start: Timestamp, content: impl Into<String>) -> Self {
        Self {
            start,
            end: None,
            content: content.into(),
            group: None,
            class_name: None,
            editable: None,
            event_type: None,
            icon: None,
            icon_alignment: None,
        }
    }

    /// Set the end instant.
    pub fn with_end(mut self, end: Timestamp) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the CSS class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the per-event editability override.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    /// Set the visual shape override.
    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the icon placement.
    pub fn with_icon_alignment(mut self, alignment: Alignment) -> Self {
        self.icon_alignment = Some(alignment);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/model.rs"]
mod tests;
