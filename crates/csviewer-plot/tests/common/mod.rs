//! Shared fixtures: in-memory tables served through a `TableLoader`.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csviewer_ingest::{DataPool, IngestError, SourceRecord, TableLoader};
use csviewer_model::{CellValue, ColumnName, SourceId, Table};
use csviewer_plot::{PlotConfiguration, PlotRenderer, RenderError};

/// Builds a table from header names and raw cell text.
pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let columns = columns
        .iter()
        .map(|name| ColumnName::new(*name).expect("column name"))
        .collect();
    let mut table = Table::new(columns, true).expect("table");
    for row in rows {
        table
            .push_row(row.iter().map(|raw| CellValue::parse(raw)).collect())
            .expect("row width");
    }
    table
}

/// Serves tables by location instead of reading files.
#[derive(Default)]
pub struct MemoryLoader {
    tables: BTreeMap<PathBuf, Table>,
}

impl MemoryLoader {
    pub fn with(mut self, location: &str, table: Table) -> Self {
        self.tables.insert(PathBuf::from(location), table);
        self
    }
}

impl TableLoader for MemoryLoader {
    fn load(&self, location: &Path) -> csviewer_ingest::Result<Table> {
        self.tables
            .get(location)
            .cloned()
            .ok_or_else(|| IngestError::Io {
                path: location.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such table"),
            })
    }
}

/// A pool with one source per table, numbered from 1.
pub fn pool(tables: Vec<Table>) -> DataPool {
    let mut loader = MemoryLoader::default();
    let mut records = Vec::new();
    for (index, table) in tables.into_iter().enumerate() {
        let location = format!("source-{}.csv", index + 1);
        loader = loader.with(&location, table);
        records.push(SourceRecord::new(SourceId::new(index as u32 + 1), location));
    }
    DataPool::load(&records, &loader).expect("load pool")
}

/// Records what it was asked to draw or copy.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<PlotConfiguration>,
    pub copied: Vec<PlotConfiguration>,
    pub fail: bool,
}

impl PlotRenderer for RecordingRenderer {
    fn render(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError> {
        if self.fail {
            return Err("backend unavailable".into());
        }
        self.rendered.push(configuration.clone());
        Ok(())
    }

    fn copy(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError> {
        self.copied.push(configuration.clone());
        Ok(())
    }
}
