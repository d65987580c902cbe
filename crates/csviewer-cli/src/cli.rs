//! CLI argument definitions for csviewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use csviewer_cli::dataset_spec::DatasetSpec;
use csviewer_model::AxisScale;

#[derive(Parser)]
#[command(
    name = "csviewer",
    version,
    about = "Inspect CSV files and build plot configurations from them",
    long_about = "Load CSV files into a data pool, pick X/Y columns for up to 20 \
                  datasets, and emit a validated plot configuration as JSON.\n\n\
                  Header rows are detected automatically; files without one get \
                  positional column names (column-0, column-1, ...)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load CSV files and show their detected columns and first rows.
    Inspect(InspectArgs),

    /// Load CSV files, configure datasets and write the plot configuration.
    Plot(PlotArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV files, numbered 1, 2, ... in the order given.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of data rows to preview per file.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct PlotArgs {
    /// CSV files, numbered 1, 2, ... in the order given.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Dataset as SOURCE[:X:Y[:LABEL]]; repeat for more datasets.
    ///
    /// SOURCE is the file number. Without X and Y the first two columns of
    /// the file are used. With no --dataset at all, one dataset is drawn
    /// from the first two columns of file 1.
    #[arg(long = "dataset", value_name = "SPEC")]
    pub datasets: Vec<DatasetSpec>,

    /// Write the configuration here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also copy the finished figure to this path.
    #[arg(long = "copy-to", value_name = "PATH")]
    pub copy_to: Option<PathBuf>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

#[derive(Args)]
pub struct FigureArgs {
    /// Figure title.
    #[arg(long = "title", default_value = "")]
    pub title: String,

    /// Figure width in inches.
    #[arg(long = "width", default_value_t = 4.8)]
    pub width: f64,

    /// Figure height in inches.
    #[arg(long = "height", default_value_t = 2.4)]
    pub height: f64,

    /// Hide the grid.
    #[arg(long = "no-grid")]
    pub no_grid: bool,

    /// Hide the legend.
    #[arg(long = "no-legend")]
    pub no_legend: bool,

    /// X axis label.
    #[arg(long = "x-label", default_value = "")]
    pub x_label: String,

    /// X axis scale (linear or log).
    #[arg(long = "x-scale", default_value = "linear")]
    pub x_scale: AxisScale,

    /// Lower X limit; used together with --x-max.
    #[arg(long = "x-min", requires = "x_max", allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Upper X limit; used together with --x-min.
    #[arg(long = "x-max", requires = "x_min", allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Y axis label.
    #[arg(long = "y-label", default_value = "")]
    pub y_label: String,

    /// Y axis scale (linear or log).
    #[arg(long = "y-scale", default_value = "linear")]
    pub y_scale: AxisScale,

    /// Lower Y limit; used together with --y-max.
    #[arg(long = "y-min", requires = "y_max", allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Upper Y limit; used together with --y-min.
    #[arg(long = "y-max", requires = "y_min", allow_negative_numbers = true)]
    pub y_max: Option<f64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
