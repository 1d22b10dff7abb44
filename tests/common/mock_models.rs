//! Mock reactor modes for testing
//!
//! These models have trivially known outputs, which makes them handy for
//! checking the provided methods of `ProductivityModel` from outside the crate.

use reactor_curves::model::{ProcessParameters, ProductivityModel};

// =================================================================================================
// Fixed Output
// =================================================================================================

/// Productivity independent of residence time
///
/// Useful to check that `evaluate` maps every grid sample through the formula.
pub struct FixedOutput {
    pub value: f64,
}

impl ProductivityModel for FixedOutput {
    fn annual_productivity(&self, _residence_h: f64, _params: &ProcessParameters) -> f64 {
        self.value
    }

    fn name(&self) -> &str {
        "Fixed Output"
    }
}

// =================================================================================================
// Continuous Stirred Tank
// =================================================================================================

/// Stirred tank needing `stages` times the plug-flow residence time
///
/// P(t) = c / (stages · t_h) · 24 · 365
pub struct ContinuousStirredTank {
    pub stages: f64,
}

impl ProductivityModel for ContinuousStirredTank {
    fn annual_productivity(&self, residence_h: f64, params: &ProcessParameters) -> f64 {
        params.concentration_kg_per_l() / (self.stages * residence_h) * 24.0 * 365.0
    }

    fn name(&self) -> &str {
        "Continuous Stirred Tank"
    }
}
