use anyhow::{Context, Result};
use tracing::{info, info_span};

use csviewer_cli::render::JsonRenderer;
use csviewer_ingest::{CsvLoader, DataPool, SourceCatalog};
use csviewer_model::{Axis, AxisScale, AxisSettings, FigureSettings};
use csviewer_plot::{CellConversionError, PlotConfiguration, Session};

use crate::cli::{FigureArgs, InspectArgs, PlotArgs};

/// What `plot` produced, for the summary printed afterwards.
pub struct PlotOutcome {
    pub configuration: PlotConfiguration,
    pub excluded: Vec<CellConversionError>,
    pub copied: bool,
}

pub fn run_inspect(args: &InspectArgs) -> Result<(SourceCatalog, DataPool)> {
    let span = info_span!("inspect", files = args.files.len());
    let _guard = span.enter();
    let mut catalog = SourceCatalog::new();
    catalog.set_sources(args.files.iter().cloned());
    let pool = DataPool::load(catalog.records(), &CsvLoader).context("load CSV files")?;
    Ok((catalog, pool))
}

pub fn run_plot(args: &PlotArgs) -> Result<PlotOutcome> {
    let span = info_span!("plot", files = args.files.len(), datasets = args.datasets.len());
    let _guard = span.enter();

    let mut session = Session::new();
    session.choose_sources(args.files.iter().cloned());
    session.import(&CsvLoader).context("import CSV files")?;

    if !args.datasets.is_empty() {
        session
            .set_dataset_count(args.datasets.len())
            .context("set dataset count")?;
    }
    for (offset, spec) in args.datasets.iter().enumerate() {
        let index = offset + 1;
        spec.apply(&mut session, index)
            .with_context(|| format!("configure dataset {index} from '{spec}'"))?;
    }

    session.set_figure(figure_settings(&args.figure));
    let (axis_x, axis_y) = axis_settings(&args.figure);
    session.set_axis(Axis::X, axis_x);
    session.set_axis(Axis::Y, axis_y);

    let mut renderer = JsonRenderer::new(args.output.clone(), args.copy_to.clone());
    let excluded = session.plot(&mut renderer).context("build plot")?;
    let copied = if args.copy_to.is_some() {
        session.copy_figure(&mut renderer).context("copy figure")?;
        true
    } else {
        false
    };
    if let Some(path) = renderer.output() {
        info!(path = %path.display(), "plot configuration written");
    }

    let configuration = session
        .current_figure()
        .cloned()
        .context("plot produced no figure")?;
    Ok(PlotOutcome {
        configuration,
        excluded,
        copied,
    })
}

fn figure_settings(args: &FigureArgs) -> FigureSettings {
    let mut figure = FigureSettings::default()
        .with_title(args.title.clone())
        .with_size(args.width, args.height);
    figure.grid_visible = !args.no_grid;
    figure.legend_visible = !args.no_legend;
    figure
}

fn axis_settings(args: &FigureArgs) -> (AxisSettings, AxisSettings) {
    let axis = |label: &str, scale: AxisScale, limits: (Option<f64>, Option<f64>)| {
        let settings = AxisSettings::default()
            .with_label(label)
            .with_scale(scale);
        match limits {
            (Some(min), Some(max)) => settings.with_limits(min, max),
            _ => settings,
        }
    };
    (
        axis(&args.x_label, args.x_scale, (args.x_min, args.x_max)),
        axis(&args.y_label, args.y_scale, (args.y_min, args.y_max)),
    )
}
