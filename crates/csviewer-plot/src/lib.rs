//! Dataset configuration and plot building for CSViewer.
//!
//! - [`DatasetDescriptorSet`]: the user's 1..=20 X/Y dataset selections, kept
//!   consistent with the data pool they are edited against
//! - [`PlotConfigBuilder`]: validates descriptors and settings and resolves
//!   every dataset into numeric series
//! - [`Session`]: the choose/import/clear/plot/copy actions of one user session
//! - [`PlotRenderer`]: the boundary to whatever draws the figure

mod builder;
mod config;
mod descriptor;
mod error;
mod render;
mod session;

pub use builder::{PlotBuild, PlotConfigBuilder};
pub use config::{PlotConfiguration, Series};
pub use descriptor::{DatasetDescriptor, DatasetDescriptorSet, MAX_DATASETS, Staleness};
pub use error::{CellConversionError, InsufficientColumns, PlotError, Result};
pub use render::{PlotRenderer, RenderError};
pub use session::Session;
