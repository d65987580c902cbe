//! Numbered list of the sources the user selected.

use std::path::{Path, PathBuf};

use csviewer_model::SourceId;
use serde::{Deserialize, Serialize};

/// One selected source and the identifier it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: SourceId,
    pub location: PathBuf,
}

impl SourceRecord {
    pub fn new(id: SourceId, location: impl Into<PathBuf>) -> Self {
        Self {
            id,
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

/// The current selection of sources.
///
/// Every call to [`SourceCatalog::set_sources`] starts a new snapshot: the
/// previous records are dropped and numbering restarts at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCatalog {
    records: Vec<SourceRecord>,
}

impl SourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sources<I, P>(&mut self, locations: I) -> &[SourceRecord]
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.records = locations
            .into_iter()
            .enumerate()
            .map(|(index, location)| SourceRecord::new(SourceId::new(index as u32 + 1), location))
            .collect();
        tracing::debug!(count = self.records.len(), "source catalog rebuilt");
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
