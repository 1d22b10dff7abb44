//! Process parameters and the productivity model trait
//!
//! - `ProcessParameters`: concentration and batch cycle overhead, checked on construction
//! - `ProductivityModel`: trait implemented by every reactor operating mode

use nalgebra::DVector;

use crate::error::{CurveError, Result};
use crate::grid::TimeGrid;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Unit of every productivity value produced by this crate
pub const PRODUCTIVITY_UNIT: &str = "t/y/m³";

/// Accepted product concentration \[g/L\]
pub const CONCENTRATION_BOUNDS: (f64, f64) = (1.0, 500.0);

/// Accepted batch cycle + dosing overhead \[h\]
pub const CYCLE_TIME_BOUNDS: (f64, f64) = (0.0, 24.0);

// =================================================================================================
// Process Parameters
// =================================================================================================

/// Process inputs shared by both reactor modes
///
/// # Example
///
/// ```rust
/// use reactor_curves::model::ProcessParameters;
///
/// let params = ProcessParameters::new(100.0, 5.0)?;
/// assert_eq!(params.concentration_kg_per_l(), 0.1);
/// # Ok::<(), reactor_curves::CurveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParameters {
    concentration_g_per_l: f64,
    cycle_time_h: f64,
}

impl ProcessParameters {
    /// Build parameters, checking both values against their declared bounds
    ///
    /// # Errors
    ///
    /// [`CurveError::ParameterOutOfBounds`] if the concentration is outside
    /// [`CONCENTRATION_BOUNDS`] or the cycle time outside [`CYCLE_TIME_BOUNDS`]
    /// (NaN is rejected as well).
    pub fn new(concentration_g_per_l: f64, cycle_time_h: f64) -> Result<Self> {
        check_bounds("concentration_g_per_l", concentration_g_per_l, CONCENTRATION_BOUNDS)?;
        check_bounds("cycle_time_h", cycle_time_h, CYCLE_TIME_BOUNDS)?;

        Ok(Self {
            concentration_g_per_l,
            cycle_time_h,
        })
    }

    /// Product concentration \[g/L\]
    pub fn concentration_g_per_l(&self) -> f64 {
        self.concentration_g_per_l
    }

    /// Product concentration \[kg/L\]
    pub fn concentration_kg_per_l(&self) -> f64 {
        self.concentration_g_per_l / 1000.0
    }

    /// Batch cycle + dosing overhead \[h\]
    pub fn cycle_time_h(&self) -> f64 {
        self.cycle_time_h
    }
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            concentration_g_per_l: 100.0,
            cycle_time_h: 5.0,
        }
    }
}

pub(crate) fn check_bounds(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(CurveError::ParameterOutOfBounds { name, value, min, max })
    }
}

// =================================================================================================
// Productivity Model Trait
// =================================================================================================

/// Trait for reactor operating modes
///
/// # Responsibility
///
/// Maps a residence time and the process parameters to an annualized
/// productivity in [`PRODUCTIVITY_UNIT`]. Implementations only provide the raw
/// formula; the provided methods take care of the time domain.
///
/// # Domain
///
/// The formulas divide by the residence time and are undefined at `t = 0`.
/// [`ProductivityModel::productivity`] returns `None` there, and
/// [`ProductivityModel::evaluate`] only accepts a [`TimeGrid`], whose samples are
/// strictly positive by construction.
pub trait ProductivityModel {
    /// Annualized productivity for a strictly positive residence time in hours
    fn annual_productivity(&self, residence_h: f64, params: &ProcessParameters) -> f64;

    /// Mode name (used as curve label)
    fn name(&self) -> &str;

    /// Productivity for a residence time in seconds, `None` for `t <= 0` or non-finite `t`
    fn productivity(&self, t_seconds: f64, params: &ProcessParameters) -> Option<f64> {
        if t_seconds > 0.0 && t_seconds.is_finite() {
            Some(self.annual_productivity(t_seconds / SECONDS_PER_HOUR, params))
        } else {
            None
        }
    }

    /// Productivity at every grid sample, index-aligned with the grid
    fn evaluate(&self, grid: &TimeGrid, params: &ProcessParameters) -> DVector<f64> {
        grid.as_vector()
            .map(|t| self.annual_productivity(t / SECONDS_PER_HOUR, params))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_valid() {
        let params = ProcessParameters::new(250.0, 0.0).unwrap();
        assert_eq!(params.concentration_g_per_l(), 250.0);
        assert_eq!(params.concentration_kg_per_l(), 0.25);
        assert_eq!(params.cycle_time_h(), 0.0);
    }

    #[test]
    fn test_parameters_bounds_inclusive() {
        assert!(ProcessParameters::new(1.0, 0.0).is_ok());
        assert!(ProcessParameters::new(500.0, 24.0).is_ok());
    }

    #[test]
    fn test_parameters_out_of_bounds() {
        assert!(matches!(
            ProcessParameters::new(600.0, 1.0),
            Err(CurveError::ParameterOutOfBounds { name: "concentration_g_per_l", .. })
        ));
        assert!(matches!(
            ProcessParameters::new(100.0, -0.5),
            Err(CurveError::ParameterOutOfBounds { name: "cycle_time_h", .. })
        ));
        assert!(ProcessParameters::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_parameters_default() {
        let params = ProcessParameters::default();
        assert_eq!(params.concentration_g_per_l(), 100.0);
        assert_eq!(params.cycle_time_h(), 5.0);
    }
}
