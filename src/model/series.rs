//! Index-aligned productivity curves for both reactor modes

use nalgebra::DVector;

use super::reactors::{BatchDosing, PlugFlow};
use super::traits::{ProcessParameters, ProductivityModel};
use crate::grid::TimeGrid;

/// Plug-flow and batch productivity over one time grid
///
/// Both vectors have the grid's length and follow its ordering: `plug_flow()[i]`
/// and `batch()[i]` are the productivities at `grid.as_slice()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductivitySeries {
    plug_flow: DVector<f64>,
    batch: DVector<f64>,
}

impl ProductivitySeries {
    /// Evaluate both reactor modes over `grid`
    pub fn evaluate(grid: &TimeGrid, params: &ProcessParameters) -> Self {
        let plug_flow = PlugFlow.evaluate(grid, params);
        let batch = BatchDosing.evaluate(grid, params);

        log::debug!(
            "productivity: {} samples, c = {} g/L, cycle = {} h",
            grid.len(),
            params.concentration_g_per_l(),
            params.cycle_time_h()
        );

        Self { plug_flow, batch }
    }

    /// Plug-flow productivity \[t/y/m³\]
    pub fn plug_flow(&self) -> &[f64] {
        self.plug_flow.as_slice()
    }

    /// Batch productivity \[t/y/m³\]
    pub fn batch(&self) -> &[f64] {
        self.batch.as_slice()
    }

    pub fn len(&self) -> usize {
        self.plug_flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plug_flow.is_empty()
    }

    /// Largest value across both curves
    pub fn max_value(&self) -> f64 {
        self.plug_flow.max().max(self.batch.max())
    }

    /// Smallest value across both curves
    pub fn min_value(&self) -> f64 {
        self.plug_flow.min().min(self.batch.min())
    }

    /// Batch / plug-flow ratio per sample
    ///
    /// Equals `t / (t + t_cycle)`: close to 0 for fast reactions, where the
    /// batch overhead dominates, and tending to 1 for slow ones.
    pub fn batch_penalty(&self) -> DVector<f64> {
        self.batch.component_div(&self.plug_flow)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Orientation, TimeRange};
    use approx::assert_relative_eq;

    fn grid() -> TimeGrid {
        let range = TimeRange::new(-2.0, 4.56).unwrap();
        TimeGrid::generate(range, 800, Orientation::Descending).unwrap()
    }

    #[test]
    fn test_series_aligned_with_grid() {
        let grid = grid();
        let series = ProductivitySeries::evaluate(&grid, &ProcessParameters::default());
        assert_eq!(series.len(), grid.len());
        assert_eq!(series.batch().len(), grid.len());
        assert!(series.plug_flow().iter().all(|p| *p > 0.0 && p.is_finite()));
        assert!(series.batch().iter().all(|p| *p > 0.0 && p.is_finite()));
    }

    #[test]
    fn test_descending_grid_gives_increasing_productivity() {
        let series = ProductivitySeries::evaluate(&grid(), &ProcessParameters::default());
        assert!(series.plug_flow().windows(2).all(|w| w[0] < w[1]));
        assert!(series.batch().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_cycle_series_identical() {
        let params = ProcessParameters::new(100.0, 0.0).unwrap();
        let series = ProductivitySeries::evaluate(&grid(), &params);
        assert_eq!(series.plug_flow(), series.batch());
    }

    #[test]
    fn test_min_max() {
        let series = ProductivitySeries::evaluate(&grid(), &ProcessParameters::default());
        // max: plug flow at 10 ms; min: batch at 10^4.56 s
        assert_eq!(series.max_value(), series.plug_flow()[series.len() - 1]);
        assert_eq!(series.min_value(), series.batch()[0]);
    }

    #[test]
    fn test_batch_penalty() {
        let params = ProcessParameters::new(100.0, 1.0).unwrap();
        let range = TimeRange::new(0.0, 3600f64.log10()).unwrap();
        let grid = TimeGrid::generate(range, 2, Orientation::Ascending).unwrap();
        let penalty = ProductivitySeries::evaluate(&grid, &params).batch_penalty();

        // t = 1 h, cycle = 1 h -> 1 / 2
        assert_relative_eq!(penalty[1], 0.5, epsilon = 1e-12);
        assert!(penalty[0] < 1e-3);
    }
}
