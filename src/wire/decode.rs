use std::collections::BTreeMap;

use crate::foundation::core::{Alignment, EventId, IconRef, Timestamp};
use crate::foundation::error::{EventlineError, EventlineResult};
use crate::schema::registry::SemanticField;
use crate::wire::manifest::FieldManifest;
use crate::wire::record::WireRecord;

/// Column value types understood by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Epoch-millisecond instant.
    Timestamp,
    /// Free text.
    Text,
    /// Boolean flag.
    Bool,
}

/// One typed output column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    /// Renderer-facing column name.
    pub name: &'static str,
    /// Column value type.
    pub ty: ColumnType,
}

/// One decoded cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// A present instant.
    Timestamp(Timestamp),
    /// Present text.
    Text(String),
    /// A present flag.
    Bool(bool),
    /// An absent value.
    Null,
}

/// Renderer-ready rows: typed columns, stable row identifiers, cell values.
///
/// The content column may already carry inlined icon markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    ids: Vec<EventId>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// The typed columns, in manifest order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of decoded rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Identifier of the row at `index`.
    pub fn row_id(&self, index: usize) -> &EventId {
        &self.ids[index]
    }

    /// Cell at `row`/`col`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }
}

/// Resolves opaque icon references into renderable URIs.
///
/// Hosts whose icon references are indirect (session resources, themed
/// bundles) translate them here; the decoder only splices the result.
pub trait IconUriResolver {
    /// Translate one icon reference.
    fn resolve(&self, icon: &IconRef) -> String;
}

/// Resolver that uses the reference string as the URI unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityResolver;

impl IconUriResolver for IdentityResolver {
    fn resolve(&self, icon: &IconRef) -> String {
        icon.uri().to_owned()
    }
}

fn column_for(field: SemanticField) -> EventlineResult<Column> {
    let column = match field {
        SemanticField::Start => Column {
            name: "start",
            ty: ColumnType::Timestamp,
        },
        SemanticField::End => Column {
            name: "end",
            ty: ColumnType::Timestamp,
        },
        SemanticField::Content => Column {
            name: "content",
            ty: ColumnType::Text,
        },
        SemanticField::Group => Column {
            name: "group",
            ty: ColumnType::Text,
        },
        SemanticField::ClassName => Column {
            name: "className",
            ty: ColumnType::Text,
        },
        SemanticField::Editable => Column {
            name: "editable",
            ty: ColumnType::Bool,
        },
        // The renderer consumes the lower-case type name as text.
        SemanticField::Type => Column {
            name: "type",
            ty: ColumnType::Text,
        },
        SemanticField::Icon | SemanticField::IconAlignment => {
            return Err(EventlineError::decode(format!(
                "unknown field '{}' in manifest",
                field.wire_name()
            )));
        }
    };
    Ok(column)
}

fn coerce(ty: ColumnType, cell: &str) -> EventlineResult<CellValue> {
    if cell.is_empty() {
        return Ok(CellValue::Null);
    }
    let value = match ty {
        ColumnType::Timestamp => CellValue::Timestamp(Timestamp::parse_wire(cell)?),
        ColumnType::Bool => CellValue::Bool(cell.eq_ignore_ascii_case("true")),
        ColumnType::Text => CellValue::Text(cell.to_owned()),
    };
    Ok(value)
}

/// Decode one batch into renderer-ready rows.
///
/// Fails the whole pass on an unrecognized manifest field, a malformed
/// record, or a cell count that does not match the manifest; a previous
/// rendering is never partially overwritten with misaligned columns.
pub fn decode<S: AsRef<str>>(
    manifest_names: &[S],
    records: &[String],
    icons: &BTreeMap<EventId, IconRef>,
    icon_alignments: &BTreeMap<EventId, Alignment>,
    resolver: &dyn IconUriResolver,
) -> EventlineResult<DataTable> {
    let manifest = FieldManifest::parse(manifest_names)?;
    let columns = manifest
        .fields()
        .iter()
        .map(|f| column_for(*f))
        .collect::<EventlineResult<Vec<_>>>()?;
    let content_col = manifest
        .fields()
        .iter()
        .position(|f| *f == SemanticField::Content)
        .ok_or_else(|| EventlineError::decode("manifest carries no content field"))?;

    let mut ids = Vec::with_capacity(records.len());
    let mut rows = Vec::with_capacity(records.len());
    for wire in records {
        let record = WireRecord::parse(wire)?;
        let cells = record.cells();
        if cells.len() != columns.len() + 1 {
            return Err(EventlineError::decode(format!(
                "record for event '{}' has {} value cell(s), manifest expects {}",
                record.id(),
                cells.len() - 1,
                columns.len()
            )));
        }

        let id = EventId::from(record.id());
        let mut row = Vec::with_capacity(columns.len());
        for (column, cell) in columns.iter().zip(&cells[1..]) {
            row.push(coerce(column.ty, cell)?);
        }

        if let Some(icon) = icons.get(&id) {
            let alignment = icon_alignments.get(&id).copied().unwrap_or_default();
            let content = match &row[content_col] {
                CellValue::Text(s) => s.clone(),
                _ => String::new(),
            };
            row[content_col] =
                CellValue::Text(splice_icon(&content, &resolver.resolve(icon), alignment));
        }

        ids.push(id);
        rows.push(row);
    }

    Ok(DataTable { columns, ids, rows })
}

/// Inline icon markup into a content string.
///
/// Horizontal margins push the icon toward its edge, the vertical flag maps
/// onto `vertical-align`, and top/bottom placements break onto their own
/// line. Bottom and right-without-top placements render the icon after the
/// text; every other alignment renders it before.
fn splice_icon(content: &str, uri: &str, alignment: Alignment) -> String {
    let mut style = String::new();
    if alignment.is_left() || alignment.is_horizontal_center() {
        style.push_str("margin-right: auto;");
    }
    if alignment.is_right() || alignment.is_horizontal_center() {
        style.push_str("margin-left: auto;");
    }
    style.push_str("vertical-align: ");
    style.push_str(alignment.vertical_css());
    style.push(';');
    if alignment.is_bottom() || alignment.is_top() {
        style.push_str("display: block;");
    }

    let icon = format!("<img src=\"{uri}\" style=\"{style}\">");

    if alignment.is_bottom() || (alignment.is_right() && !alignment.is_top()) {
        format!("{content}{icon}")
    } else {
        format!("{icon}{content}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/decode.rs"]
mod tests;
