//! Simple tables built from caller-supplied rows.
//!
//! Two row shapes are supported. `KeyedTable` takes rows of named text
//! columns with an optional row color; `NumericTable` takes positional rows of
//! numbers colored by sign. In both, `table_width` is derived from the last
//! row only. Rows of different widths are emitted as given.

use super::common::UnitCommon;
use crate::constants::ROW_COLOR_KEY;
use crate::error::EmitError;
use crate::payload::{self, text_cell, EmitPayload, Payload};
use crate::types::{Annotations, Color, ParentId, UnitId, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// One row of a `KeyedTable`: cell text by column name, in column order.
///
/// As JSON a row is a flat object whose reserved `"Color"` entry colors the
/// whole row instead of becoming a column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, String>",
    into = "IndexMap<String, String>"
)]
pub struct TableRow {
    cells: IndexMap<String, String>,
    color: Option<Color>,
}

impl TableRow {
    /// A row rendering every pair as a column, in iteration order.
    pub fn new<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds a row from a flat mapping, lifting the reserved color key.
    pub fn from_mapping(mut mapping: IndexMap<String, String>) -> Result<Self, ValidationError> {
        let color = mapping
            .shift_remove(ROW_COLOR_KEY)
            .map(|name| name.parse::<Color>())
            .transpose()?;
        Ok(Self {
            cells: mapping,
            color,
        })
    }

    pub fn cells(&self) -> &IndexMap<String, String> {
        &self.cells
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Number of rendered columns.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    fn emit(&self) -> Value {
        let annotations = Annotations::colored(self.color.unwrap_or_default());
        let cells = self
            .cells
            .values()
            .map(|text| text_cell(Value::String(text.clone()), &annotations))
            .collect();
        payload::table_row(cells)
    }
}

impl TryFrom<IndexMap<String, String>> for TableRow {
    type Error = ValidationError;

    fn try_from(mapping: IndexMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_mapping(mapping)
    }
}

impl From<TableRow> for IndexMap<String, String> {
    fn from(row: TableRow) -> Self {
        let mut mapping = row.cells;
        if let Some(color) = row.color {
            mapping.insert(ROW_COLOR_KEY.to_string(), color.as_str().to_string());
        }
        mapping
    }
}

/// Table whose rows name their columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedTable {
    #[serde(flatten)]
    common: UnitCommon,
    rows: Vec<TableRow>,
}

impl KeyedTable {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        rows: Vec<TableRow>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            rows,
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Width declared on the wire: the column count of the last row.
    pub fn table_width(&self) -> Result<usize, EmitError> {
        self.rows
            .last()
            .map(TableRow::width)
            .ok_or_else(|| EmitError::EmptyTable {
                table_id: self.common.id.to_string(),
            })
    }
}

impl EmitPayload for KeyedTable {
    fn emit(&self) -> Result<Payload, EmitError> {
        let width = self.table_width()?;
        if self.rows.iter().any(|row| row.width() != width) {
            log::debug!(
                "Table '{}' has rows of differing widths; declaring width {} from the last row",
                self.common.id,
                width
            );
        }
        let rows = self.rows.iter().map(TableRow::emit).collect();
        Ok(payload::table(width, rows))
    }
}

impl fmt::Display for KeyedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table:{}", self.common.id)
    }
}

/// Table of positional numeric rows.
///
/// Positive cells are colored black, all others default. The declared width is
/// one less than the length of the last row that has cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTable {
    #[serde(flatten)]
    common: UnitCommon,
    rows: Vec<Vec<Number>>,
}

impl NumericTable {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        rows: Vec<Vec<Number>>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            rows,
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn rows(&self) -> &[Vec<Number>] {
        &self.rows
    }

    /// Width declared on the wire.
    ///
    /// Empty rows leave the width untouched, so it comes from the last row
    /// with cells; the minus one keeps payloads identical to existing callers.
    pub fn table_width(&self) -> Result<usize, EmitError> {
        self.rows
            .iter()
            .rev()
            .find(|row| !row.is_empty())
            .map(|row| row.len() - 1)
            .ok_or_else(|| EmitError::EmptyTable {
                table_id: self.common.id.to_string(),
            })
    }

    fn cell_color(value: &Number) -> Color {
        if value.as_f64().is_some_and(|v| v > 0.0) {
            Color::Black
        } else {
            Color::Default
        }
    }
}

impl EmitPayload for NumericTable {
    fn emit(&self) -> Result<Payload, EmitError> {
        let width = self.table_width()?;
        log::debug!("Numeric table '{}' declares width {}", self.common.id, width);
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|value| {
                        text_cell(
                            Value::Number(value.clone()),
                            &Annotations::colored(Self::cell_color(value)),
                        )
                    })
                    .collect();
                payload::table_row(cells)
            })
            .collect();
        Ok(payload::table(width, rows))
    }
}

impl fmt::Display for NumericTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table:{}", self.common.id)
    }
}
