//! A `PlotRenderer` that writes the configuration as pretty-printed JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csviewer_plot::{PlotConfiguration, PlotRenderer, RenderError};

/// Writes rendered figures to `output` (stdout when unset) and copied
/// figures to `copy_to`.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    output: Option<PathBuf>,
    copy_to: Option<PathBuf>,
}

impl JsonRenderer {
    pub fn new(output: Option<PathBuf>, copy_to: Option<PathBuf>) -> Self {
        Self { output, copy_to }
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

impl PlotRenderer for JsonRenderer {
    fn render(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError> {
        match &self.output {
            Some(path) => write_to_file(path, configuration),
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                serde_json::to_writer_pretty(&mut writer, configuration)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    fn copy(&mut self, configuration: &PlotConfiguration) -> Result<(), RenderError> {
        let path = self
            .copy_to
            .as_deref()
            .ok_or("no copy destination configured")?;
        write_to_file(path, configuration)
    }
}

fn write_to_file(path: &Path, configuration: &PlotConfiguration) -> Result<(), RenderError> {
    let file = File::create(path)
        .map_err(|error| format!("failed to create {}: {error}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, configuration)?;
    writeln!(writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "figure written");
    Ok(())
}
