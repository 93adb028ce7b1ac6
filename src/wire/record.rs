use smallvec::SmallVec;

use crate::foundation::error::{EventlineError, EventlineResult};

/// One event's encoded form: an ordered list of string cells.
///
/// Cell 0 is the event identifier, cell 1 the start instant; the rest follow
/// the manifest order. The transport form is a JSON array of strings, so cell
/// content can never collide with a delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireRecord {
    cells: SmallVec<[String; 8]>,
}

impl WireRecord {
    /// Record starting with the identifier cell.
    pub fn new(id_cell: impl Into<String>) -> Self {
        let mut cells = SmallVec::new();
        cells.push(id_cell.into());
        Self { cells }
    }

    /// Record over pre-built cells.
    pub fn from_cells(cells: Vec<String>) -> Self {
        Self {
            cells: cells.into(),
        }
    }

    /// Append one cell.
    pub fn push_cell(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    /// The identifier cell.
    pub fn id(&self) -> &str {
        &self.cells[0]
    }

    /// All cells in wire order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Transport form: the cells as a JSON array of strings.
    pub fn to_wire_string(&self) -> String {
        // Serializing a string slice cannot fail.
        serde_json::to_string(self.cells.as_slice()).expect("cell list serializes")
    }

    /// Parse the transport form.
    ///
    /// Anything but a JSON array of strings with at least the identifier and
    /// start cells fails the decode pass.
    pub fn parse(wire: &str) -> EventlineResult<Self> {
        let cells: Vec<String> = serde_json::from_str(wire)
            .map_err(|e| EventlineError::decode(format!("malformed wire record: {e}")))?;
        if cells.len() < 2 {
            return Err(EventlineError::decode(format!(
                "wire record has {} cell(s), expected at least id and start",
                cells.len()
            )));
        }
        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/record.rs"]
mod tests;
