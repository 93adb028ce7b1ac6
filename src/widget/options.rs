use serde::{Deserialize, Serialize};

use crate::container::model::EventStyle;
use crate::foundation::core::Timestamp;
use crate::wire::defaults::FieldDefaults;

/// Length unit for widget dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeUnit {
    /// CSS pixels.
    #[default]
    Px,
    /// Percentage of the parent.
    Percent,
}

impl SizeUnit {
    /// Symbol sent in the size-unit attributes.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }
}

/// One widget dimension: a value and its unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Dimension value.
    pub value: f32,
    /// Dimension unit.
    pub unit: SizeUnit,
}

impl Size {
    /// A pixel dimension.
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: SizeUnit::Px,
        }
    }

    /// A percentage dimension.
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: SizeUnit::Percent,
        }
    }
}

/// Display options passed through to the renderer, plus the codec defaults.
///
/// Everything here is pass-through configuration except [`Self::defaults`],
/// which both codec sides consult when a per-event value is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineOptions {
    /// Widget width.
    pub width: Size,
    /// Widget height.
    pub height: Size,
    /// Allow add, modify and delete operations on the timeline.
    pub editable: bool,
    /// Enable timeline animations.
    pub animate: bool,
    /// Send client interactions to the server immediately.
    pub immediate: bool,
    /// Default style for events without a per-event type.
    pub style: EventStyle,
    /// Display the time axis on top instead of bottom.
    pub axis_on_top: bool,
    /// Show navigation controls.
    pub show_navigation: bool,
    /// Start of the initially visible range.
    #[serde(default)]
    pub viewport_start: Option<Timestamp>,
    /// End of the initially visible range.
    #[serde(default)]
    pub viewport_end: Option<Timestamp>,
    /// Lower bound of the entire timeline.
    #[serde(default)]
    pub timeline_start: Option<Timestamp>,
    /// Upper bound of the entire timeline.
    #[serde(default)]
    pub timeline_end: Option<Timestamp>,
    /// Fallbacks for absent per-event values.
    #[serde(default)]
    pub defaults: FieldDefaults,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            width: Size::px(500.0),
            height: Size::px(250.0),
            editable: true,
            animate: false,
            immediate: false,
            style: EventStyle::Box,
            axis_on_top: false,
            show_navigation: true,
            viewport_start: None,
            viewport_end: None,
            timeline_start: None,
            timeline_end: None,
            defaults: FieldDefaults::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/options.rs"]
mod tests;
