//! Error types for dataset configuration and plot building.

use csviewer_ingest::IngestError;
use csviewer_model::{Axis, CellValue, ColumnName, SourceId};
use thiserror::Error;

use crate::descriptor::Staleness;

/// Errors raised by descriptor mutations, plot building and session actions.
#[derive(Debug, Error)]
pub enum PlotError {
    // === Descriptor Errors ===
    /// Requested dataset count is outside the supported range.
    #[error("dataset count {requested} is outside the supported range 1..={max}")]
    DatasetCount { requested: usize, max: usize },

    /// Descriptor index does not exist.
    #[error("dataset {index} does not exist (there are {len})")]
    UnknownDataset { index: usize, len: usize },

    /// Source identifier is not present in the data pool.
    #[error("unknown source {id}")]
    UnknownSource { id: SourceId },

    /// Field is not a column of the descriptor's source.
    #[error("dataset {index}: column '{field}' is not in {}", describe_source(.id))]
    UnknownField {
        index: usize,
        id: Option<SourceId>,
        field: String,
    },

    #[error(transparent)]
    InsufficientColumns(#[from] InsufficientColumns),

    // === Build Errors ===
    /// Nothing has been imported.
    #[error("the data pool is empty; import CSV data first")]
    EmptyPool,

    /// A descriptor no longer resolves against the pool.
    #[error("dataset {index} is invalid: {reason}")]
    DatasetValidation { index: usize, reason: Staleness },

    /// Axis limits are not strictly increasing.
    #[error("{axis}-axis limits must satisfy min < max (got min {min}, max {max})")]
    AxisLimits { axis: Axis, min: f64, max: f64 },

    // === Session Errors ===
    /// Import was requested before any source was chosen.
    #[error("no CSV sources chosen; choose CSV files first")]
    NoSources,

    /// Copy was requested before anything was plotted.
    #[error("there is no figure to copy; plot first")]
    NoFigure,

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The rendering collaborator reported a failure.
    #[error("renderer failed: {source}")]
    Render {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn describe_source(id: &Option<SourceId>) -> String {
    match id {
        Some(id) => format!("source {id}"),
        None => "an unbound dataset".to_string(),
    }
}

/// A source too narrow to supply both an X and a Y column.
///
/// Returned as a report from `set_source`: the source change itself is kept,
/// with both fields left unbound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("source {id} has {columns} column(s); two are needed to choose X and Y fields")]
pub struct InsufficientColumns {
    pub id: SourceId,
    pub columns: usize,
}

/// A plotted cell that is not a number.
///
/// The row is left out of its series; the rest of the build continues.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("dataset {dataset}: row {row}, column '{column}': {} is not a number", describe_cell(.value))]
pub struct CellConversionError {
    /// 1-based descriptor index.
    pub dataset: usize,
    /// 0-based data row index within the source table.
    pub row: usize,
    pub column: ColumnName,
    pub value: CellValue,
}

fn describe_cell(value: &CellValue) -> String {
    match value {
        CellValue::Missing => "missing value".to_string(),
        other => format!("'{other}'"),
    }
}

/// Result type for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = CellConversionError {
            dataset: 1,
            row: 1,
            column: ColumnName::new("y").unwrap(),
            value: CellValue::Text("bad".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "dataset 1: row 1, column 'y': 'bad' is not a number"
        );
    }

    #[test]
    fn test_unknown_field_on_unbound_dataset() {
        let err = PlotError::UnknownField {
            index: 2,
            id: None,
            field: "t".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dataset 2: column 't' is not in an unbound dataset"
        );
    }

    #[test]
    fn test_axis_limits_display() {
        let err = PlotError::AxisLimits {
            axis: Axis::X,
            min: 5.0,
            max: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "x-axis limits must satisfy min < max (got min 5, max 5)"
        );
    }
}
