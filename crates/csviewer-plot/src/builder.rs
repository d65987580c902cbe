//! Assembles a validated [`PlotConfiguration`] from the pool and descriptors.

use csviewer_ingest::DataPool;
use csviewer_model::{Axis, AxisSettings, CellValue, FigureSettings};

use crate::config::{PlotConfiguration, Series};
use crate::descriptor::{DatasetDescriptor, DatasetDescriptorSet};
use crate::error::{CellConversionError, PlotError, Result};

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBuild {
    pub configuration: PlotConfiguration,
    /// Cells that were left out because they are not numbers.
    pub conversion_errors: Vec<CellConversionError>,
}

impl PlotBuild {
    pub fn is_clean(&self) -> bool {
        self.conversion_errors.is_empty()
    }
}

/// Folds a pool, a descriptor set and figure/axis settings into one
/// configuration.
///
/// Structural problems abort the build: an empty pool, a descriptor that no
/// longer resolves, or axis limits that are not strictly increasing. Cells
/// that fail numeric conversion only drop their row from that series and are
/// reported in [`PlotBuild::conversion_errors`].
#[derive(Debug, Clone)]
pub struct PlotConfigBuilder<'a> {
    pool: &'a DataPool,
    descriptors: &'a DatasetDescriptorSet,
    figure: FigureSettings,
    axis_x: AxisSettings,
    axis_y: AxisSettings,
}

impl<'a> PlotConfigBuilder<'a> {
    pub fn new(pool: &'a DataPool, descriptors: &'a DatasetDescriptorSet) -> Self {
        Self {
            pool,
            descriptors,
            figure: FigureSettings::default(),
            axis_x: AxisSettings::default(),
            axis_y: AxisSettings::default(),
        }
    }

    #[must_use]
    pub fn with_figure(mut self, figure: FigureSettings) -> Self {
        self.figure = figure;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis, settings: AxisSettings) -> Self {
        match axis {
            Axis::X => self.axis_x = settings,
            Axis::Y => self.axis_y = settings,
        }
        self
    }

    pub fn build(self) -> Result<PlotBuild> {
        if self.pool.is_empty() {
            return Err(PlotError::EmptyPool);
        }
        for (index, descriptor) in self.descriptors.iter() {
            if let Some(reason) = descriptor.staleness(self.pool) {
                return Err(PlotError::DatasetValidation { index, reason });
            }
        }
        check_limits(Axis::X, &self.axis_x)?;
        check_limits(Axis::Y, &self.axis_y)?;

        let mut datasets = Vec::with_capacity(self.descriptors.len());
        let mut conversion_errors = Vec::new();
        for (index, descriptor) in self.descriptors.iter() {
            let series = resolve_series(index, descriptor, self.pool, &mut conversion_errors)?;
            datasets.push(series);
        }
        for error in &conversion_errors {
            tracing::warn!(%error, "cell excluded from plot");
        }
        tracing::info!(
            datasets = datasets.len(),
            excluded_cells = conversion_errors.len(),
            "plot configuration built"
        );

        Ok(PlotBuild {
            configuration: PlotConfiguration::new(
                datasets,
                self.figure,
                self.axis_x,
                self.axis_y,
            ),
            conversion_errors,
        })
    }
}

fn check_limits(axis: Axis, settings: &AxisSettings) -> Result<()> {
    match settings.limits {
        Some(limits) if !limits.is_ordered() => Err(PlotError::AxisLimits {
            axis,
            min: limits.min,
            max: limits.max,
        }),
        _ => Ok(()),
    }
}

/// Stands in for a cell a row does not have.
static MISSING: CellValue = CellValue::Missing;

/// The cell as a finite number, or `None` when it cannot be drawn.
fn plottable(cell: &CellValue) -> Option<f64> {
    cell.as_f64().filter(|value| value.is_finite())
}

fn resolve_series(
    index: usize,
    descriptor: &DatasetDescriptor,
    pool: &DataPool,
    conversion_errors: &mut Vec<CellConversionError>,
) -> Result<Series> {
    let resolved = descriptor
        .resolve(pool)
        .map_err(|reason| PlotError::DatasetValidation { index, reason })?;

    let mut points = Vec::with_capacity(resolved.table.height());
    for (row_index, row) in resolved.table.rows().iter().enumerate() {
        let x = row.get(resolved.x_index).unwrap_or(&MISSING);
        let y = row.get(resolved.y_index).unwrap_or(&MISSING);
        if let (Some(x), Some(y)) = (plottable(x), plottable(y)) {
            points.push((x, y));
            continue;
        }
        let same_column = resolved.x_index == resolved.y_index;
        for (column, cell) in [(resolved.field_x, x), (resolved.field_y, y)]
            .into_iter()
            .take(if same_column { 1 } else { 2 })
        {
            if plottable(cell).is_none() {
                conversion_errors.push(CellConversionError {
                    dataset: index,
                    row: row_index,
                    column: column.clone(),
                    value: cell.clone(),
                });
            }
        }
    }

    Ok(Series::new(
        resolved.id,
        resolved.field_x.clone(),
        resolved.field_y.clone(),
        descriptor.label.clone(),
        points,
    ))
}
