#![deny(unsafe_code)]

use std::collections::BTreeSet;

use crate::{CellValue, ColumnName, ModelError};

/// One data row; cells are stored in the owning table's column order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A parsed source: unique named columns and rows of exactly that width.
///
/// Tables are built once by a loader and then only read; a reload replaces
/// the whole value. Deserialization goes through the same checks as
/// [`Table::new`] and [`Table::push_row`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Row>,
    header_detected: bool,
}

/// Wire shape of a [`Table`] before validation.
#[derive(serde::Deserialize)]
struct RawTable {
    columns: Vec<ColumnName>,
    rows: Vec<Row>,
    header_detected: bool,
}

impl TryFrom<RawTable> for Table {
    type Error = ModelError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let mut table = Table::new(raw.columns, raw.header_detected)?;
        for row in raw.rows {
            table.push_row(row.cells)?;
        }
        Ok(table)
    }
}

impl Table {
    pub fn new(columns: Vec<ColumnName>, header_detected: bool) -> Result<Self, ModelError> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn(column.to_string()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            header_detected,
        })
    }

    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<(), ModelError> {
        if cells.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(Row { cells });
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the first line of the source was taken as the header.
    pub fn header_detected(&self) -> bool {
        self.header_detected
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of one column in row order, or `None` for an unknown column.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row.cells[index]))
    }
}
