//! Compute-then-render pipeline
//!
//! One invocation per parameter change, nothing kept between invocations:
//!
//! ```text
//! ChartParameters ─► TimeGrid ─► ProductivitySeries ─► TickSet ─► ChartArtifact
//!  (4 inputs)        (log-spaced)  (plug flow + batch)   (canonical)  (plotters SVG)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use reactor_curves::pipeline::{render, ChartParameters, GridSettings};
//! use reactor_curves::output::PlotConfig;
//!
//! let params = ChartParameters::new(100.0, 5.0, true, (-2.0, 4.56))?;
//! let chart = render(&params, &GridSettings::default(), &PlotConfig::default())?;
//! chart.save("productivity.svg")?;
//! # Ok::<(), reactor_curves::CurveError>(())
//! ```

use crate::error::Result;
use crate::grid::{select_ticks, Orientation, TickSet, TimeGrid, TimeRange};
use crate::model::{ProcessParameters, ProductivitySeries};
use crate::output::visualization::{render_chart, ChartArtifact, PlotConfig};

/// Accepted visible window, as base-10 exponents of seconds
pub const VISIBLE_RANGE_BOUNDS: (f64, f64) = (-4.0, 5.7);

/// Default visible window: 10 ms to about 10 h
pub const DEFAULT_VISIBLE_RANGE: (f64, f64) = crate::grid::DEFAULT_EXPONENTS;

/// Default number of time samples
pub const DEFAULT_SAMPLES: usize = 800;

// =================================================================================================
// Inputs
// =================================================================================================

/// Scale of the productivity axis (the time axis is always logarithmic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    #[default]
    Logarithmic,
    Linear,
}

impl YScale {
    pub fn from_log_flag(use_log_scale: bool) -> Self {
        if use_log_scale {
            YScale::Logarithmic
        } else {
            YScale::Linear
        }
    }
}

/// The four externally supplied inputs of one recompute
///
/// This value replaces any ambient UI state: callers build it from their
/// widgets, config file or command line, and pass it in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartParameters {
    pub process: ProcessParameters,
    pub y_scale: YScale,
    pub visible_range: TimeRange,
}

impl ChartParameters {
    /// Build and check all four inputs
    ///
    /// # Errors
    ///
    /// - [`CurveError::ParameterOutOfBounds`](crate::CurveError::ParameterOutOfBounds) for a concentration, cycle time or
    ///   range exponent outside its declared domain
    /// - [`CurveError::InvalidRange`](crate::CurveError::InvalidRange) if `low >= high`
    pub fn new(
        concentration_g_per_l: f64,
        cycle_time_h: f64,
        use_log_scale_y: bool,
        (low, high): (f64, f64),
    ) -> Result<Self> {
        let process = ProcessParameters::new(concentration_g_per_l, cycle_time_h)?;
        let visible_range = TimeRange::new(low, high)?;

        for (name, value) in [("range_low", low), ("range_high", high)] {
            crate::model::traits::check_bounds(name, value, VISIBLE_RANGE_BOUNDS)?;
        }

        Ok(Self {
            process,
            y_scale: YScale::from_log_flag(use_log_scale_y),
            visible_range,
        })
    }
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            process: ProcessParameters::default(),
            y_scale: YScale::Logarithmic,
            visible_range: TimeRange::default(),
        }
    }
}

/// Grid resolution and time-axis orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    pub samples: usize,
    pub orientation: Orientation,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            orientation: Orientation::Descending,
        }
    }
}

// =================================================================================================
// Outputs
// =================================================================================================

/// Everything the renderer and the exporters need from one compute pass
#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityCurves {
    pub grid: TimeGrid,
    pub series: ProductivitySeries,
    pub ticks: TickSet,
    pub y_scale: YScale,
    pub process: ProcessParameters,
}

impl ProductivityCurves {
    /// Visible window the grid spans
    pub fn visible_range(&self) -> TimeRange {
        self.grid.range()
    }
}

/// Run grid generation, model evaluation and tick selection
///
/// The grid spans exactly the visible window, so curves and ticks share one range.
///
/// # Errors
///
/// [`CurveError::InvalidSampleCount`](crate::CurveError::InvalidSampleCount) if `settings.samples < 2`.
pub fn compute(params: &ChartParameters, settings: &GridSettings) -> Result<ProductivityCurves> {
    let grid = TimeGrid::generate(params.visible_range, settings.samples, settings.orientation)?;
    let series = ProductivitySeries::evaluate(&grid, &params.process);
    let ticks = select_ticks(&params.visible_range, settings.orientation);

    log::debug!("pipeline: {} ticks selected, y scale {:?}", ticks.len(), params.y_scale);

    Ok(ProductivityCurves {
        grid,
        series,
        ticks,
        y_scale: params.y_scale,
        process: params.process,
    })
}

/// Full pass: compute the curves and draw them into an in-memory chart
///
/// # Errors
///
/// Propagates [`compute`] errors, and [`CurveError::Render`](crate::CurveError::Render) on backend failure.
pub fn render(
    params: &ChartParameters,
    settings: &GridSettings,
    config: &PlotConfig,
) -> Result<ChartArtifact> {
    let curves = compute(params, settings)?;
    render_chart(&curves, config)
}

/// Same as [`render`] but returns the intermediate curves as well
pub fn render_with_curves(
    params: &ChartParameters,
    settings: &GridSettings,
    config: &PlotConfig,
) -> Result<(ProductivityCurves, ChartArtifact)> {
    let curves = compute(params, settings)?;
    let chart = render_chart(&curves, config)?;
    Ok((curves, chart))
}

impl From<&ProductivityCurves> for ChartParameters {
    fn from(curves: &ProductivityCurves) -> Self {
        Self {
            process: curves.process,
            y_scale: curves.y_scale,
            visible_range: curves.visible_range(),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let params = ChartParameters::default();
        assert_eq!(params.y_scale, YScale::Logarithmic);
        assert_eq!(params.visible_range.low(), -2.0);
        assert_eq!(params.visible_range.high(), 4.56);
        assert_eq!(params.process.cycle_time_h(), 5.0);
    }

    #[test]
    fn test_parameters_reject_range_outside_domain() {
        assert!(matches!(
            ChartParameters::new(100.0, 5.0, true, (-5.0, 2.0)),
            Err(CurveError::ParameterOutOfBounds { name: "range_low", .. })
        ));
        assert!(matches!(
            ChartParameters::new(100.0, 5.0, true, (0.0, 6.0)),
            Err(CurveError::ParameterOutOfBounds { name: "range_high", .. })
        ));
    }

    #[test]
    fn test_parameters_reject_inverted_range() {
        assert!(matches!(
            ChartParameters::new(100.0, 5.0, false, (3.0, 1.0)),
            Err(CurveError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_compute_shapes() {
        let curves = compute(&ChartParameters::default(), &GridSettings::default()).unwrap();
        assert_eq!(curves.grid.len(), DEFAULT_SAMPLES);
        assert_eq!(curves.series.len(), DEFAULT_SAMPLES);
        assert_eq!(curves.ticks.labels()[0], "10 h");
        assert_relative_eq!(curves.grid.first(), 10f64.powf(4.56), max_relative = 1e-12);
    }

    #[test]
    fn test_compute_rejects_single_sample() {
        let settings = GridSettings { samples: 1, orientation: Orientation::Ascending };
        assert!(matches!(
            compute(&ChartParameters::default(), &settings),
            Err(CurveError::InvalidSampleCount(1))
        ));
    }

    #[test]
    fn test_parameters_recovered_from_curves() {
        let params = ChartParameters::new(250.0, 0.0, false, (-1.0, 3.0)).unwrap();
        let curves = compute(&params, &GridSettings::default()).unwrap();
        assert_eq!(ChartParameters::from(&curves), params);
    }
}
