//! # reactor-curves
//!
//! Command-line front end for the plug flow vs batch productivity pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Default chart (100 g/L, 5 h cycle, 10 ms .. ~10 h, log productivity axis)
//! reactor-curves plot productivity.svg
//!
//! # Linear axis, no overhead, bitmap output
//! reactor-curves --cycle-time 0 --linear-y plot productivity.png
//!
//! # Same inputs, as data
//! reactor-curves --config plant.toml export curves.csv --metadata
//!
//! # Which labels the time axis will carry
//! reactor-curves --range-low -1 --range-high 3 ticks
//! ```
//!
//! Command-line flags override the config file, which overrides the defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use reactor_curves::config::AppConfig;
use reactor_curves::output::export::{CsvExporter, Exporter};
use reactor_curves::output::{render_to_file, CsvConfig, CsvMetadata};
use reactor_curves::pipeline::compute;

/// Plug flow vs batch reactor productivity curves
#[derive(Parser)]
#[command(name = "reactor-curves")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Product concentration in g/L (1-500)
    #[arg(long, global = true)]
    concentration: Option<f64>,

    /// Batch cycle + dosing overhead in hours (0-24)
    #[arg(long, global = true)]
    cycle_time: Option<f64>,

    /// Linear productivity axis instead of logarithmic
    #[arg(long, global = true)]
    linear_y: bool,

    /// Lower visible time exponent, log10(s)
    #[arg(long, allow_hyphen_values = true, global = true)]
    range_low: Option<f64>,

    /// Upper visible time exponent, log10(s)
    #[arg(long, allow_hyphen_values = true, global = true)]
    range_high: Option<f64>,

    /// Number of time samples (800-1000)
    #[arg(long, global = true)]
    samples: Option<usize>,

    /// Fast reactions on the left (ascending time axis)
    #[arg(long, global = true)]
    no_invert: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the chart (.svg for vector output, anything else for a bitmap)
    Plot {
        /// Output image path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Chart caption
        #[arg(long)]
        title: Option<String>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Write the time grid and both series to CSV
    Export {
        /// Output CSV path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Prepend a '#' comment header with the process parameters
        #[arg(long)]
        metadata: bool,

        /// Semicolon delimiter and decimal comma
        #[arg(long)]
        european: bool,

        /// Decimal places
        #[arg(long, default_value = "6")]
        precision: usize,

        /// Keep only this many evenly spaced rows, at least 2 (ends included)
        #[arg(long, value_name = "N")]
        points: Option<usize>,
    },

    /// Print the time-axis labels selected for the visible range
    Ticks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Plot { output, title, width, height } => {
            run_plot(config, output, title, width, height)
        }
        Commands::Export { output, metadata, european, precision, points } => {
            run_export(&config, output, metadata, european, precision, points)
        }
        Commands::Ticks => run_ticks(&config),
    }
}

/// Config file (if any) with the global flags applied on top
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => AppConfig::default(),
    };

    config.process.concentration = cli.concentration.or(config.process.concentration);
    config.process.cycle_time = cli.cycle_time.or(config.process.cycle_time);
    config.axis.range_low = cli.range_low.or(config.axis.range_low);
    config.axis.range_high = cli.range_high.or(config.axis.range_high);
    config.grid.samples = cli.samples.or(config.grid.samples);

    if cli.linear_y {
        config.axis.log_scale_y = Some(false);
    }
    if cli.no_invert {
        config.axis.invert = Some(false);
    }

    Ok(config)
}

fn run_plot(
    mut config: AppConfig,
    output: PathBuf,
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    config.plot.title = title.or(config.plot.title);
    config.plot.width = width.or(config.plot.width);
    config.plot.height = height.or(config.plot.height);

    let params = config.to_parameters().context("Invalid chart parameters")?;
    let settings = config.grid_settings().context("Invalid grid settings")?;
    let curves = compute(&params, &settings).context("Failed to compute curves")?;

    let output_str = output.to_str().context("Output path is not valid UTF-8")?;
    render_to_file(&curves, output_str, Some(&config.plot_config()))
        .with_context(|| format!("Failed to render chart to {}", output.display()))?;

    info!("Plot complete: {}", output.display());
    Ok(())
}

fn run_export(
    config: &AppConfig,
    output: PathBuf,
    metadata: bool,
    european: bool,
    precision: usize,
    points: Option<usize>,
) -> Result<()> {
    let params = config.to_parameters().context("Invalid chart parameters")?;
    let settings = config.grid_settings().context("Invalid grid settings")?;
    let curves = compute(&params, &settings).context("Failed to compute curves")?;

    let mut csv_config = if european { CsvConfig::european() } else { CsvConfig::default() };
    csv_config = csv_config.precision(precision);
    if metadata {
        csv_config = csv_config.with_metadata(CsvMetadata::from_curves(&curves));
    }

    let output_str = output.to_str().context("Output path is not valid UTF-8")?;
    CsvExporter::new(csv_config)
        .export(&curves, points, output_str)
        .with_context(|| format!("Failed to export curves to {}", output.display()))?;

    info!("Export complete: {}", output.display());
    Ok(())
}

fn run_ticks(config: &AppConfig) -> Result<()> {
    let params = config.to_parameters().context("Invalid chart parameters")?;
    let ticks = reactor_curves::grid::select_ticks(
        &params.visible_range,
        config.grid_settings()?.orientation,
    );

    if ticks.is_empty() {
        println!(
            "No canonical tick between 10^{} s and 10^{} s",
            params.visible_range.low(),
            params.visible_range.high()
        );
        return Ok(());
    }

    for tick in ticks.ticks() {
        println!("{:>12} s  {}", tick.position, tick.label);
    }
    Ok(())
}
