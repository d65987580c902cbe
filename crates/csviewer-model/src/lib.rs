//! Core data model for CSViewer.
//!
//! Plain data types shared by the ingestion and plotting crates: source
//! identifiers, column names, parsed tables and the figure/axis settings a
//! plot request carries.

pub mod cell;
pub mod error;
pub mod ids;
pub mod settings;
pub mod table;

pub use cell::{CellValue, looks_numeric};
pub use error::{ModelError, Result};
pub use ids::{ColumnName, SourceId};
pub use settings::{Axis, AxisLimits, AxisScale, AxisSettings, FigureSettings, FigureSize};
pub use table::{Row, Table};
