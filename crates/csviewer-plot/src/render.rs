//! Boundary to the plotting back end.

use crate::config::PlotConfiguration;

/// Error type renderers report back through the session.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// The collaborator that turns a configuration into a chart.
pub trait PlotRenderer {
    /// Draws a new figure from `configuration`.
    fn render(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError>;

    /// Exports an already drawn figure, e.g. to the clipboard.
    fn copy(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError>;
}
