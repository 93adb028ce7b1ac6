use std::fmt;

use crate::foundation::error::{EventlineError, EventlineResult};

/// Absolute instant as milliseconds since the Unix epoch.
///
/// This is the only time representation that crosses the wire; cells carry it
/// as a decimal string.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(self) -> i64 {
        self.0
    }

    /// Decimal wire form.
    pub fn to_wire(self) -> String {
        self.0.to_string()
    }

    /// Parse the decimal wire form.
    pub fn parse_wire(cell: &str) -> EventlineResult<Self> {
        cell.parse::<i64>()
            .map(Self)
            .map_err(|_| EventlineError::decode(format!("invalid timestamp cell '{cell}'")))
    }
}

/// Stable, host-assigned identifier of one event row.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EventId(pub String);

impl EventId {
    /// String form used as the first wire cell and in side-channel keys.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Host-chosen key used to look up a semantic field inside the event container.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PropertyId(pub String);

impl PropertyId {
    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the key carries no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque icon resource reference.
///
/// The core never interprets the URI; the client view resolves it through a
/// host-supplied resolver before splicing markup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IconRef(pub String);

impl IconRef {
    /// The raw resource URI.
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Icon placement relative to the event content, as a bitmask.
///
/// Bit values match the numeric wire form sent in the `iconpos-` side-channel:
/// left=1, right=2, top=4, bottom=8, horizontal-center=16, vertical-center=32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    bits: u8,
}

impl Alignment {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;
    const HORIZONTAL_CENTER: u8 = 16;
    const VERTICAL_CENTER: u8 = 32;

    const MASK: u8 = Self::LEFT
        | Self::RIGHT
        | Self::TOP
        | Self::BOTTOM
        | Self::HORIZONTAL_CENTER
        | Self::VERTICAL_CENTER;

    /// Top left corner.
    pub const TOP_LEFT: Alignment = Alignment::from_bits(Self::TOP | Self::LEFT);
    /// Top edge, horizontally centered. The default icon placement.
    pub const TOP_CENTER: Alignment = Alignment::from_bits(Self::TOP | Self::HORIZONTAL_CENTER);
    /// Top right corner.
    pub const TOP_RIGHT: Alignment = Alignment::from_bits(Self::TOP | Self::RIGHT);
    /// Left edge, vertically centered.
    pub const MIDDLE_LEFT: Alignment = Alignment::from_bits(Self::VERTICAL_CENTER | Self::LEFT);
    /// Dead center.
    pub const MIDDLE_CENTER: Alignment =
        Alignment::from_bits(Self::VERTICAL_CENTER | Self::HORIZONTAL_CENTER);
    /// Right edge, vertically centered.
    pub const MIDDLE_RIGHT: Alignment = Alignment::from_bits(Self::VERTICAL_CENTER | Self::RIGHT);
    /// Bottom left corner.
    pub const BOTTOM_LEFT: Alignment = Alignment::from_bits(Self::BOTTOM | Self::LEFT);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM_CENTER: Alignment =
        Alignment::from_bits(Self::BOTTOM | Self::HORIZONTAL_CENTER);
    /// Bottom right corner.
    pub const BOTTOM_RIGHT: Alignment = Alignment::from_bits(Self::BOTTOM | Self::RIGHT);

    /// Reconstruct an alignment from its numeric wire form.
    ///
    /// Bits outside the known set are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & Self::MASK,
        }
    }

    /// Numeric wire form.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// True when aligned to the left edge.
    pub const fn is_left(self) -> bool {
        self.bits & Self::LEFT != 0
    }

    /// True when aligned to the right edge.
    pub const fn is_right(self) -> bool {
        self.bits & Self::RIGHT != 0
    }

    /// True when aligned to the top edge.
    pub const fn is_top(self) -> bool {
        self.bits & Self::TOP != 0
    }

    /// True when aligned to the bottom edge.
    pub const fn is_bottom(self) -> bool {
        self.bits & Self::BOTTOM != 0
    }

    /// True when horizontally centered.
    pub const fn is_horizontal_center(self) -> bool {
        self.bits & Self::HORIZONTAL_CENTER != 0
    }

    /// True when vertically centered.
    pub const fn is_vertical_center(self) -> bool {
        self.bits & Self::VERTICAL_CENTER != 0
    }

    /// CSS `vertical-align` keyword for the vertical component.
    pub const fn vertical_css(self) -> &'static str {
        if self.is_top() {
            "top"
        } else if self.is_bottom() {
            "bottom"
        } else {
            "middle"
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_CENTER
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
