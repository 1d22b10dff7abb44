//! Productivity chart rendering
//!
//! Draws both reactor curves against reaction time:
//!
//! - time axis in log10 space, inverted when the grid is descending
//!   (slow reactions on the left), labelled only from the selected [`TickSet`](crate::grid::TickSet)
//! - productivity axis logarithmic or linear, thousands-grouped integer labels
//! - dashed major and minor grid, legend
//!
//! # Available functions
//!
//! - [`render_chart`]: draw into an in-memory SVG [`ChartArtifact`]
//! - [`render_to_file`]: draw straight to a `.svg` or bitmap file
//!
//! # Usage
//!
//! ```rust,ignore
//! use reactor_curves::pipeline::{compute, ChartParameters, GridSettings};
//! use reactor_curves::output::visualization::{render_chart, render_to_file, PlotConfig};
//!
//! let curves = compute(&ChartParameters::default(), &GridSettings::default())?;
//!
//! let chart = render_chart(&curves, &PlotConfig::default())?;
//! chart.save("productivity.svg")?;
//!
//! render_to_file(&curves, "productivity.png", None)?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use super::axis::{dash_segments, format_thousands, minor_positions, productivity_bounds, TimeAxis};
use super::config::PlotConfig;
use crate::error::{CurveError, Result};
use crate::model::{BatchDosing, PlugFlow, ProductivityModel};
use crate::pipeline::{ProductivityCurves, YScale};

// =================================================================================================
// Chart Artifact
// =================================================================================================

/// A rendered chart, held as an SVG document
///
/// Owned by whoever displays or stores it; the pipeline keeps no reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    svg: String,
    width: u32,
    height: u32,
}

impl ChartArtifact {
    /// SVG document
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Image size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Write the SVG document to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), &self.svg)?;
        log::info!("chart written to {}", path.as_ref().display());
        Ok(())
    }
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render the curves into an in-memory SVG chart
///
/// # Errors
///
/// [`CurveError::Render`] if plotters fails to lay out or draw the chart.
pub fn render_chart(curves: &ProductivityCurves, config: &PlotConfig) -> Result<ChartArtifact> {
    let mut svg = String::new();
    {
        let backend = SVGBackend::with_string(&mut svg, (config.width, config.height));
        draw_productivity(backend, curves, config).map_err(|e| CurveError::Render(e.to_string()))?;
    }

    Ok(ChartArtifact {
        svg,
        width: config.width,
        height: config.height,
    })
}

/// Render the curves straight to a file
///
/// `.svg` selects the vector backend, any other extension the bitmap backend.
///
/// # Errors
///
/// [`CurveError::Render`] if the backend cannot draw or write to `output_path`.
pub fn render_to_file(
    curves: &ProductivityCurves,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let drawn = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_productivity(backend, curves, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_productivity(backend, curves, config)
        }
    };
    drawn.map_err(|e| CurveError::Render(e.to_string()))?;

    log::info!("chart written to {}", output_path);
    Ok(())
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Pick the productivity coordinate for the requested scale and draw
fn draw_productivity<DB: DrawingBackend>(
    backend: DB,
    curves: &ProductivityCurves,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let bounds = productivity_bounds(&curves.series, curves.y_scale);

    match curves.y_scale {
        YScale::Logarithmic => {
            let y_spec: LogCoord<f64> = bounds.log_scale().into();
            draw_on(&root, curves, config, y_spec)?;
        }
        YScale::Linear => {
            let y_spec: RangedCoordf64 = bounds.into();
            draw_on(&root, curves, config, y_spec)?;
        }
    }

    root.present()?;
    Ok(())
}

/// Draw axes, grid, curves and legend on `root` with the given productivity coordinate
fn draw_on<DB, Y>(
    root: &DrawingArea<DB, Shift>,
    curves: &ProductivityCurves,
    config: &PlotConfig,
    y_spec: Y,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let time_axis = TimeAxis::new(curves.visible_range(), curves.grid.orientation().is_inverted());
    let tick_positions = curves.ticks.positions();
    let x_keys: Vec<f64> = tick_positions.iter().map(|t| time_axis.to_axis(*t)).collect();
    let x_bounds = time_axis.bounds();

    let y_major = y_spec.key_points(config.y_labels);
    let y_bounds = y_spec.range();

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(100)
        .build_cartesian_2d(x_bounds.clone(), y_spec)?;

    // Time labels come from the tick set only, drawn below
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_labels(0)
        .y_labels(config.y_labels)
        .y_label_formatter(&|y| format_thousands(*y))
        .draw()?;

    // ── Time labels ──────────────────────────────────────────────────────────
    let label_style = ("sans-serif", 14)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (tick, x) in curves.ticks.ticks().iter().zip(&x_keys) {
        let (px, py) = chart.backend_coord(&(*x, y_bounds.start));
        root.draw(&Text::new(tick.label, (px, py + 6), label_style.clone()))?;
    }

    // ── Dashed grid ──────────────────────────────────────────────────────────
    if config.show_grid {
        let log_y = curves.y_scale == YScale::Logarithmic;
        let major_style = config.grid_color.mix(0.6).stroke_width(1);
        let minor_style = config.grid_color.mix(0.25).stroke_width(1);

        let x_minor: Vec<f64> = time_axis
            .minor_positions(&tick_positions)
            .iter()
            .map(|t| time_axis.to_axis(*t))
            .collect();
        let y_minor = minor_positions(&y_major, &y_bounds, curves.y_scale);

        let vertical = |xs: &[f64]| -> Vec<Vec<(f64, f64)>> {
            xs.iter()
                .flat_map(|x| {
                    dash_segments(y_bounds.start, y_bounds.end, config.grid_dashes / 2, log_y)
                        .into_iter()
                        .map(move |(a, b)| vec![(*x, a), (*x, b)])
                })
                .collect()
        };
        let horizontal = |ys: &[f64]| -> Vec<Vec<(f64, f64)>> {
            ys.iter()
                .flat_map(|y| {
                    dash_segments(x_bounds.start, x_bounds.end, config.grid_dashes, false)
                        .into_iter()
                        .map(move |(a, b)| vec![(a, *y), (b, *y)])
                })
                .collect()
        };

        let layers = [
            (vertical(&x_minor), minor_style),
            (horizontal(&y_minor), minor_style),
            (vertical(&x_keys), major_style),
            (horizontal(&y_major), major_style),
        ];
        for (lines, style) in layers {
            chart.draw_series(lines.into_iter().map(|pts| PathElement::new(pts, style)))?;
        }
    }

    // ── Curves ───────────────────────────────────────────────────────────────
    let (plug_flow, batch) = (PlugFlow, BatchDosing);
    let curve_data = [
        (plug_flow.name(), curves.series.plug_flow(), config.plug_flow_color),
        (batch.name(), curves.series.batch(), config.batch_color),
    ];

    for (label, values, color) in curve_data {
        chart
            .draw_series(LineSeries::new(
                curves
                    .grid
                    .iter()
                    .zip(values.iter())
                    .map(|(t, p)| (time_axis.to_axis(*t), *p)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
