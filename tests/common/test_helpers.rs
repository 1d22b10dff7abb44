//! Helper functions for integration tests

use reactor_curves::grid::Orientation;
use reactor_curves::pipeline::{compute, ChartParameters, GridSettings, ProductivityCurves};

/// Relative error between computed and expected values
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-15 {
        computed.abs()
    } else {
        ((computed - expected) / expected).abs()
    }
}

/// Assert that `values` strictly decrease
pub fn assert_strictly_decreasing(values: &[f64], message: &str) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] < w[0],
            "{}: value {} ({}) is not below value {} ({})",
            message, i + 1, w[1], i, w[0]
        );
    }
}

/// Compute curves on an ascending grid, panicking on invalid inputs
pub fn curves_for(
    concentration: f64,
    cycle_time: f64,
    range: (f64, f64),
    samples: usize,
) -> ProductivityCurves {
    let params = ChartParameters::new(concentration, cycle_time, true, range)
        .expect("valid chart parameters");
    let settings = GridSettings { samples, orientation: Orientation::Ascending };
    compute(&params, &settings).expect("compute succeeds")
}

/// Horizontal anchor of the SVG `<text>` element whose content is exactly `label`
pub fn text_x(svg: &str, label: &str) -> Option<f64> {
    let end = svg.find(&format!(">{}</text>", label))?;
    let start = svg[..end].rfind("<text")?;
    let attrs = &svg[start..end];
    let value = attrs.split(" x=\"").nth(1)?.split('"').next()?;
    value.parse().ok()
}
