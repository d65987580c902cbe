//! The in-memory store of loaded tables.

use std::collections::BTreeMap;

use csviewer_model::{ColumnName, SourceId, Table};

use crate::catalog::SourceRecord;
use crate::error::{IngestError, Result, SourceFailure};
use crate::loader::TableLoader;

/// Loaded tables keyed by source identifier, iterated in catalog order.
///
/// A pool is only ever replaced as a whole: [`DataPool::rebuild`] either
/// installs a table for every source or leaves the pool as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPool {
    tables: BTreeMap<SourceId, Table>,
}

impl DataPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every source, collecting all failures before giving up.
    pub fn load<L>(sources: &[SourceRecord], loader: &L) -> Result<Self>
    where
        L: TableLoader + ?Sized,
    {
        let mut tables = BTreeMap::new();
        let mut failures = Vec::new();
        for record in sources {
            match loader.load(&record.location) {
                Ok(table) => {
                    tables.insert(record.id, table);
                }
                Err(error) => {
                    tracing::warn!(
                        source = %record.id,
                        path = %record.location.display(),
                        %error,
                        "source failed to load"
                    );
                    failures.push(SourceFailure {
                        id: record.id,
                        location: record.location.clone(),
                        error,
                    });
                }
            }
        }
        if !failures.is_empty() {
            return Err(IngestError::Load { failures });
        }
        tracing::info!(sources = tables.len(), "data pool loaded");
        Ok(Self { tables })
    }

    /// Replaces the pool with freshly loaded tables; untouched on error.
    pub fn rebuild<L>(&mut self, sources: &[SourceRecord], loader: &L) -> Result<()>
    where
        L: TableLoader + ?Sized,
    {
        *self = Self::load(sources, loader)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }

    pub fn get(&self, id: SourceId) -> Option<&Table> {
        self.tables.get(&id)
    }

    pub fn contains(&self, id: SourceId) -> bool {
        self.tables.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.tables.keys().copied()
    }

    pub fn first_id(&self) -> Option<SourceId> {
        self.tables.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &Table)> + '_ {
        self.tables.iter().map(|(id, table)| (*id, table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn columns_of(&self, id: SourceId) -> Result<&[ColumnName]> {
        self.get(id)
            .map(Table::columns)
            .ok_or(IngestError::UnknownSource { id })
    }
}
