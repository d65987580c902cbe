//! Dataset descriptors and the resizable set that holds them.

use std::fmt;

use csviewer_ingest::DataPool;
use csviewer_model::{Axis, ColumnName, SourceId, Table};
use serde::{Deserialize, Serialize};

use crate::error::{InsufficientColumns, PlotError, Result};

/// Upper bound on the number of datasets in one plot.
pub const MAX_DATASETS: usize = 20;

/// Why a descriptor does not resolve against the current pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// No source was ever assigned.
    Unbound,
    /// The source is no longer in the pool.
    MissingSource(SourceId),
    /// No column is selected for this axis.
    UnboundField(Axis),
    /// The selected column is not in the source table.
    MissingField {
        axis: Axis,
        id: SourceId,
        field: ColumnName,
    },
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound => f.write_str("no source selected"),
            Self::MissingSource(id) => write!(f, "source {id} is not in the data pool"),
            Self::UnboundField(axis) => write!(f, "no {axis} field selected"),
            Self::MissingField { axis, id, field } => {
                write!(f, "{axis} field '{field}' is not a column of source {id}")
            }
        }
    }
}

/// One plot series: which source, which two columns, and its legend label.
///
/// `None` marks the unbound state used before anything is imported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub source: Option<SourceId>,
    pub field_x: Option<ColumnName>,
    pub field_y: Option<ColumnName>,
    pub label: String,
}

/// References of a descriptor that resolved against a pool.
pub(crate) struct Resolved<'a> {
    pub id: SourceId,
    pub table: &'a Table,
    pub field_x: &'a ColumnName,
    pub field_y: &'a ColumnName,
    pub x_index: usize,
    pub y_index: usize,
}

impl DatasetDescriptor {
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Descriptor bound to the pool's first source, or unbound for an empty pool.
    pub fn defaulted(pool: &DataPool) -> Self {
        let mut descriptor = Self::unbound();
        if let Some((id, table)) = pool.iter().next()
            && let Some(report) = descriptor.bind(id, table)
        {
            tracing::warn!(%report, "default dataset left without fields");
        }
        descriptor
    }

    /// Points the descriptor at `table`, selecting its first two columns.
    fn bind(&mut self, id: SourceId, table: &Table) -> Option<InsufficientColumns> {
        self.source = Some(id);
        match table.columns() {
            [x, y, ..] => {
                self.field_x = Some(x.clone());
                self.field_y = Some(y.clone());
                None
            }
            columns => {
                self.field_x = None;
                self.field_y = None;
                Some(InsufficientColumns {
                    id,
                    columns: columns.len(),
                })
            }
        }
    }

    pub fn field(&self, axis: Axis) -> Option<&ColumnName> {
        match axis {
            Axis::X => self.field_x.as_ref(),
            Axis::Y => self.field_y.as_ref(),
        }
    }

    pub(crate) fn resolve<'a>(
        &'a self,
        pool: &'a DataPool,
    ) -> std::result::Result<Resolved<'a>, Staleness> {
        let id = self.source.ok_or(Staleness::Unbound)?;
        let table = pool.get(id).ok_or(Staleness::MissingSource(id))?;
        let field = |axis: Axis| -> std::result::Result<(&'a ColumnName, usize), Staleness> {
            let field = self.field(axis).ok_or(Staleness::UnboundField(axis))?;
            let position = table.column_index(field.as_str()).ok_or_else(|| {
                Staleness::MissingField {
                    axis,
                    id,
                    field: field.clone(),
                }
            })?;
            Ok((field, position))
        };
        let (field_x, x_index) = field(Axis::X)?;
        let (field_y, y_index) = field(Axis::Y)?;
        Ok(Resolved {
            id,
            table,
            field_x,
            field_y,
            x_index,
            y_index,
        })
    }

    /// `None` when the descriptor resolves against `pool`.
    pub fn staleness(&self, pool: &DataPool) -> Option<Staleness> {
        self.resolve(pool).err()
    }
}

/// Ordered descriptors addressed by 1-based index; never empty, never more
/// than [`MAX_DATASETS`].
///
/// Validity is relative to the pool passed into each call. If the pool is
/// rebuilt or cleared underneath the set, descriptors stay as they are and
/// show up in [`DatasetDescriptorSet::stale_indices`] until `reset` or
/// `set_source` repairs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetDescriptorSet {
    descriptors: Vec<DatasetDescriptor>,
}

impl Default for DatasetDescriptorSet {
    fn default() -> Self {
        Self {
            descriptors: vec![DatasetDescriptor::unbound()],
        }
    }
}

impl DatasetDescriptorSet {
    /// A single descriptor defaulted against `pool`.
    pub fn reset(pool: &DataPool) -> Self {
        Self {
            descriptors: vec![DatasetDescriptor::defaulted(pool)],
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DatasetDescriptor> {
        index
            .checked_sub(1)
            .and_then(|slot| self.descriptors.get(slot))
    }

    /// Descriptors paired with their 1-based index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DatasetDescriptor)> + '_ {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(slot, descriptor)| (slot + 1, descriptor))
    }

    /// Grows by appending descriptors defaulted to the pool's first source,
    /// or shrinks by dropping from the tail.
    pub fn resize(&mut self, target: usize, pool: &DataPool) -> Result<()> {
        if !(1..=MAX_DATASETS).contains(&target) {
            return Err(PlotError::DatasetCount {
                requested: target,
                max: MAX_DATASETS,
            });
        }
        let current = self.descriptors.len();
        if target > current {
            let template = DatasetDescriptor::defaulted(pool);
            self.descriptors.resize(target, template);
        } else {
            self.descriptors.truncate(target);
        }
        if target != current {
            tracing::debug!(from = current, to = target, "resized dataset descriptors");
        }
        Ok(())
    }

    /// Switches descriptor `index` to source `id` and selects its first two
    /// columns.
    ///
    /// When the table has fewer than two columns the switch still happens,
    /// both fields become unbound, and the shortfall is returned.
    pub fn set_source(
        &mut self,
        index: usize,
        id: SourceId,
        pool: &DataPool,
    ) -> Result<Option<InsufficientColumns>> {
        let len = self.len();
        let table = pool.get(id).ok_or(PlotError::UnknownSource { id })?;
        let descriptor = self.slot_mut(index, len)?;
        let shortfall = descriptor.bind(id, table);
        if let Some(report) = &shortfall {
            tracing::warn!(dataset = index, %report, "source cannot supply X and Y fields");
        }
        Ok(shortfall)
    }

    pub fn set_field(
        &mut self,
        index: usize,
        axis: Axis,
        field: &str,
        pool: &DataPool,
    ) -> Result<()> {
        let len = self.len();
        let descriptor = self.slot_mut(index, len)?;
        let column = descriptor
            .source
            .and_then(|id| pool.get(id))
            .and_then(|table| {
                let position = table.column_index(field)?;
                Some(table.columns()[position].clone())
            })
            .ok_or_else(|| PlotError::UnknownField {
                index,
                id: descriptor.source,
                field: field.to_string(),
            })?;
        match axis {
            Axis::X => descriptor.field_x = Some(column),
            Axis::Y => descriptor.field_y = Some(column),
        }
        Ok(())
    }

    pub fn set_label(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.len();
        self.slot_mut(index, len)?.label = text.into();
        Ok(())
    }

    /// Every descriptor that does not resolve against `pool`.
    pub fn stale_indices(&self, pool: &DataPool) -> Vec<(usize, Staleness)> {
        self.iter()
            .filter_map(|(index, descriptor)| {
                descriptor.staleness(pool).map(|reason| (index, reason))
            })
            .collect()
    }

    fn slot_mut(&mut self, index: usize, len: usize) -> Result<&mut DatasetDescriptor> {
        index
            .checked_sub(1)
            .and_then(|slot| self.descriptors.get_mut(slot))
            .ok_or(PlotError::UnknownDataset { index, len })
    }
}
