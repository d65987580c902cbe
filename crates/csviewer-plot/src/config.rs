//! The immutable configuration handed to a renderer.

use csviewer_model::{Axis, AxisSettings, ColumnName, FigureSettings, SourceId};
use serde::Serialize;

/// One resolved series: the numeric X/Y values of a dataset, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    source: SourceId,
    x_field: ColumnName,
    y_field: ColumnName,
    label: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub(crate) fn new(
        source: SourceId,
        x_field: ColumnName,
        y_field: ColumnName,
        label: String,
        points: Vec<(f64, f64)>,
    ) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self {
            source,
            x_field,
            y_field,
            label,
            x,
            y,
        }
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn x_field(&self) -> &ColumnName {
        &self.x_field
    }

    pub fn y_field(&self) -> &ColumnName {
        &self.y_field
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Everything a renderer needs for one figure.
///
/// Only [`PlotConfigBuilder`](crate::PlotConfigBuilder) creates these, after
/// validating every reference, and nothing mutates one afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotConfiguration {
    datasets: Vec<Series>,
    figure: FigureSettings,
    axis_x: AxisSettings,
    axis_y: AxisSettings,
}

impl PlotConfiguration {
    pub(crate) fn new(
        datasets: Vec<Series>,
        figure: FigureSettings,
        axis_x: AxisSettings,
        axis_y: AxisSettings,
    ) -> Self {
        Self {
            datasets,
            figure,
            axis_x,
            axis_y,
        }
    }

    pub fn datasets(&self) -> &[Series] {
        &self.datasets
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
}
