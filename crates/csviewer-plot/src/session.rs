//! The user actions of one interactive session.

use std::path::PathBuf;

use csviewer_ingest::{DataPool, SourceCatalog, SourceRecord, TableLoader};
use csviewer_model::{Axis, AxisSettings, FigureSettings, SourceId};

use crate::builder::PlotConfigBuilder;
use crate::config::PlotConfiguration;
use crate::descriptor::DatasetDescriptorSet;
use crate::error::{CellConversionError, InsufficientColumns, PlotError, Result};
use crate::render::PlotRenderer;

/// Catalog, pool, descriptors, settings and the last drawn figure of one
/// user session.
///
/// A session is a plain owned value with no internal locking. Front ends
/// that dispatch actions from more than one thread must serialize access
/// themselves, e.g. by holding it in a `Mutex`.
#[derive(Debug, Default)]
pub struct Session {
    catalog: SourceCatalog,
    pool: DataPool,
    descriptors: DatasetDescriptorSet,
    figure: FigureSettings,
    axis_x: AxisSettings,
    axis_y: AxisSettings,
    current_figure: Option<PlotConfiguration>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    pub fn pool(&self) -> &DataPool {
        &self.pool
    }

    pub fn descriptors(&self) -> &DatasetDescriptorSet {
        &self.descriptors
    }

    pub fn figure(&self) -> &FigureSettings {
        &self.figure
    }

    pub fn axis(&self, axis: Axis) -> &AxisSettings {
        match axis {
            Axis::X => &self.axis_x,
            Axis::Y => &self.axis_y,
        }
    }

    /// The configuration most recently handed to a renderer.
    pub fn current_figure(&self) -> Option<&PlotConfiguration> {
        self.current_figure.as_ref()
    }

    /// Replaces the file selection.
    ///
    /// Pool identifiers belong to the previous catalog, so the pool is
    /// emptied and the descriptors go back to a single unbound entry.
    pub fn choose_sources<I, P>(&mut self, locations: I) -> &[SourceRecord]
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.catalog.set_sources(locations);
        self.pool.clear();
        self.descriptors = DatasetDescriptorSet::reset(&self.pool);
        tracing::info!(sources = self.catalog.len(), "sources chosen");
        self.catalog.records()
    }

    /// Loads every chosen source and resets the descriptors against the new
    /// pool. On failure the pool and descriptors are left as they were.
    pub fn import<L>(&mut self, loader: &L) -> Result<()>
    where
        L: TableLoader + ?Sized,
    {
        if self.catalog.is_empty() {
            return Err(PlotError::NoSources);
        }
        self.pool.rebuild(self.catalog.records(), loader)?;
        self.descriptors = DatasetDescriptorSet::reset(&self.pool);
        Ok(())
    }

    /// Empties the pool. Descriptors are kept and stay stale until the next
    /// import or `set_source`.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
        tracing::info!("data pool cleared");
    }

    pub fn set_dataset_count(&mut self, count: usize) -> Result<()> {
        if self.pool.is_empty() {
            return Err(PlotError::EmptyPool);
        }
        self.descriptors.resize(count, &self.pool)
    }

    pub fn set_source(
        &mut self,
        index: usize,
        id: SourceId,
    ) -> Result<Option<InsufficientColumns>> {
        self.descriptors.set_source(index, id, &self.pool)
    }

    pub fn set_field(&mut self, index: usize, axis: Axis, field: &str) -> Result<()> {
        self.descriptors.set_field(index, axis, field, &self.pool)
    }

    pub fn set_label(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.descriptors.set_label(index, text)
    }

    pub fn set_figure(&mut self, figure: FigureSettings) {
        self.figure = figure;
    }

    pub fn set_axis(&mut self, axis: Axis, settings: AxisSettings) {
        match axis {
            Axis::X => self.axis_x = settings,
            Axis::Y => self.axis_y = settings,
        }
    }

    /// Builds the configuration, hands it to `renderer` and keeps it as the
    /// current figure. Returns the cells that were left out of the plot.
    pub fn plot<R>(&mut self, renderer: &mut R) -> Result<Vec<CellConversionError>>
    where
        R: PlotRenderer + ?Sized,
    {
        let build = PlotConfigBuilder::new(&self.pool, &self.descriptors)
            .with_figure(self.figure.clone())
            .with_axis(Axis::X, self.axis_x.clone())
            .with_axis(Axis::Y, self.axis_y.clone())
            .build()?;
        renderer
            .render(&build.configuration)
            .map_err(|source| PlotError::Render { source })?;
        self.current_figure = Some(build.configuration);
        Ok(build.conversion_errors)
    }

    /// Passes the current figure to the renderer's copy hook.
    pub fn copy_figure<R>(&self, renderer: &mut R) -> Result<()>
    where
        R: PlotRenderer + ?Sized,
    {
        let figure = self.current_figure.as_ref().ok_or(PlotError::NoFigure)?;
        renderer
            .copy(figure)
            .map_err(|source| PlotError::Render { source })
    }
}
