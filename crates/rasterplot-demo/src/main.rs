// File: crates/rasterplot-demo/src/main.rs
// Summary: Demo CLI rendering sample line/heatmap charts or columns of a CSV file to PNG.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rasterplot_core::{theme, Chart, Heatmap, LineStyle, RenderOptions, Series};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rasterplot")]
#[command(version, about = "Render line, dot, pillar and heatmap charts to PNG")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output PNG path
    #[arg(short, long, global = true, default_value = "chart.png")]
    out: PathBuf,

    /// Canvas width in pixels
    #[arg(long, global = true, default_value_t = rasterplot_core::types::WIDTH)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, global = true, default_value_t = rasterplot_core::types::HEIGHT)]
    height: i32,

    /// Color theme (light, dark)
    #[arg(long, global = true, default_value = "light")]
    theme: String,

    /// Replace an existing output file instead of picking a numbered name
    #[arg(long, global = true)]
    overwrite: bool,

    /// Skip tick and point labels (no font needed)
    #[arg(long, global = true)]
    no_labels: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample chart with solid, dotted and pillar series
    Lines,

    /// Sample heatmap with a color legend
    Heatmap {
        /// Grid rows
        #[arg(long, default_value_t = 24)]
        rows: usize,
        /// Grid columns
        #[arg(long, default_value_t = 32)]
        cols: usize,
    },

    /// Plot columns of a CSV file
    Csv(CsvArgs),
}

#[derive(Args, Debug)]
struct CsvArgs {
    /// Input CSV with a header row
    input: PathBuf,

    /// Header of the x column
    #[arg(short, long)]
    x: String,

    /// Header of a y column; repeat for several series
    #[arg(short, long, required = true)]
    y: Vec<String>,

    /// Draw a dot at every point
    #[arg(long)]
    dots: bool,

    /// Draw pillars from the x axis instead of a line
    #[arg(long)]
    pillars: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = render_options(&cli.output)?;
    let mut chart = Chart::with_options(cli.output.width, cli.output.height, opts)
        .with_context(|| format!("creating a {}x{} canvas", cli.output.width, cli.output.height))?;

    match &cli.command {
        Commands::Lines => add_sample_lines(&mut chart)?,
        Commands::Heatmap { rows, cols } => add_sample_heatmap(&mut chart, *rows, *cols)?,
        Commands::Csv(args) => add_csv_series(&mut chart, args)?,
    }

    chart.render().context("rendering chart")?;
    let written = chart
        .export_png(&cli.output.out, cli.output.overwrite)
        .with_context(|| format!("writing {}", cli.output.out.display()))?;
    println!("Wrote {}", written.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn render_options(out: &OutputArgs) -> Result<RenderOptions> {
    let Some(theme) = theme::find(&out.theme) else {
        let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
        bail!("unknown theme '{}' (known: {})", out.theme, known.join(", "));
    };
    Ok(RenderOptions { theme, draw_labels: !out.no_labels, ..RenderOptions::default() })
}

fn add_sample_lines(chart: &mut Chart) -> Result<()> {
    let x = rasterplot_core::linspace(-3.0, 3.0, 61);
    let sine = x.iter().map(|v| (v * 1.5).sin() * 2.0).collect();
    let damped = x.iter().map(|v| (-v * v / 4.0).exp() * 3.0 - 1.0).collect();
    chart.add_series(Series::new(x.clone(), sine).with_style(LineStyle::new().solid()))?;
    chart.add_series(Series::new(x, damped).with_style(LineStyle::new().solid_width(1.5).dots_radius(2.0)))?;

    let bars = rasterplot_core::int_range(-2, 3);
    let heights = bars.iter().map(|b| 1.0 - b * 0.6).collect();
    chart.add_series(
        Series::new(bars.clone(), heights)
            .with_style(LineStyle::new().pillars_width(6.0))
            .with_labels(bars.iter().map(|b| format!("p{b}"))),
    )?;
    tracing::info!(series = chart.series().len(), "sample lines ready");
    Ok(())
}

fn add_sample_heatmap(chart: &mut Chart, rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        bail!("heatmap needs at least one row and one column");
    }
    let x = rasterplot_core::linspace(-2.0, 2.0, cols);
    let y = rasterplot_core::linspace(-1.0, 1.0, rows);
    let values = y
        .iter()
        .map(|&yv| x.iter().map(|&xv| (xv * 2.0).sin() * (yv * 3.0).cos() + xv * 0.25).collect())
        .collect();
    chart.set_heatmap(Heatmap::new(x, y, values))?;
    tracing::info!(rows, cols, "sample heatmap ready");
    Ok(())
}

fn add_csv_series(chart: &mut Chart, args: &CsvArgs) -> Result<()> {
    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let table = load_columns(file, &args.x, &args.y)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut style = if args.pillars { LineStyle::new().pillars() } else { LineStyle::new().solid() };
    if args.dots {
        style = style.dots();
    }
    for (name, ys) in args.y.iter().zip(table.ys) {
        tracing::debug!(column = %name, points = ys.len(), "adding csv series");
        chart.add_series(Series::new(table.x.clone(), ys).with_style(style))?;
    }
    tracing::info!(rows = table.x.len(), file = %display_name(&args.input), "csv loaded");
    Ok(())
}

/// Parsed x column and one vector per requested y column, all equal length.
#[derive(Debug, PartialEq)]
struct Columns {
    x: Vec<f64>,
    ys: Vec<Vec<f64>>,
}

/// Read numeric columns by header name. Rows whose cells in any requested
/// column fail to parse are skipped with a warning.
fn load_columns<R: Read>(reader: R, x_col: &str, y_cols: &[String]) -> Result<Columns> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers().context("reading header row")?.clone();
    let index = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .with_context(|| format!("no column named '{name}' (headers: {:?})", headers))
    };
    let ix = index(x_col)?;
    let iys = y_cols.iter().map(|c| index(c)).collect::<Result<Vec<_>>>()?;

    let mut out = Columns { x: Vec::new(), ys: vec![Vec::new(); iys.len()] };
    for (line, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("record {}", line + 1))?;
        let cell = |i: usize| record.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(x), Some(ys)) = (cell(ix), iys.iter().map(|&i| cell(i)).collect::<Option<Vec<_>>>()) else {
            tracing::warn!(record = line + 1, "skipping row with a non-numeric cell");
            continue;
        };
        out.x.push(x);
        for (col, y) in out.ys.iter_mut().zip(ys) {
            col.push(y);
        }
    }
    if out.x.is_empty() {
        bail!("no numeric rows found");
    }
    Ok(out)
}

fn display_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}
