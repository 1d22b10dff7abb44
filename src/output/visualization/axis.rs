//! Axis geometry shared by the chart renderer
//!
//! Pure helpers, no drawing backend involved:
//!
//! - [`TimeAxis`]: maps seconds to the plotted (log10, optionally negated) coordinate
//! - [`productivity_bounds`]: productivity-axis extent for a [`YScale`]
//! - [`minor_positions`]: minor grid lines between major ones
//! - [`dash_segments`]: splits a grid line into dashes
//! - [`format_thousands`]: thousands-grouped integer labels

use std::ops::Range;

use crate::grid::TimeRange;
use crate::model::ProductivitySeries;
use crate::pipeline::YScale;

// =================================================================================================
// Time Axis
// =================================================================================================

/// Time axis drawn in log10 space
///
/// The chart coordinate of a time `t` is `log10(t)`, or `-log10(t)` when the axis
/// is inverted. Negating keeps the coordinate range ascending for the backend
/// while putting long reaction times on the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    range: TimeRange,
    inverted: bool,
}

impl TimeAxis {
    pub fn new(range: TimeRange, inverted: bool) -> Self {
        Self { range, inverted }
    }

    /// Seconds → chart coordinate
    pub fn to_axis(&self, seconds: f64) -> f64 {
        let x = seconds.log10();
        if self.inverted {
            -x
        } else {
            x
        }
    }

    /// Chart coordinate → seconds
    pub fn to_seconds(&self, x: f64) -> f64 {
        if self.inverted {
            10f64.powf(-x)
        } else {
            10f64.powf(x)
        }
    }

    /// Chart coordinate extent, always ascending
    pub fn bounds(&self) -> Range<f64> {
        if self.inverted {
            -self.range.high()..-self.range.low()
        } else {
            self.range.low()..self.range.high()
        }
    }

    /// Minor grid positions \[s\]: every `k·10^n` (k = 1..9) inside the window, minus `exclude`
    pub fn minor_positions(&self, exclude: &[f64]) -> Vec<f64> {
        let first_decade = self.range.low().floor() as i32;
        let last_decade = self.range.high().ceil() as i32;

        (first_decade..=last_decade)
            .flat_map(|n| (1..=9).map(move |k| k as f64 * 10f64.powi(n)))
            .filter(|t| self.range.contains(*t))
            .filter(|t| !exclude.iter().any(|e| ((e - t) / t).abs() < 1e-9))
            .collect()
    }
}

// =================================================================================================
// Productivity Axis
// =================================================================================================

/// Productivity-axis extent
///
/// - logarithmic: `[0.8·min, 1.25·max]`, so both curves keep a margin on each end
/// - linear: `[0, 1.05·max]`
pub fn productivity_bounds(series: &ProductivitySeries, scale: YScale) -> Range<f64> {
    let max = series.max_value();
    match scale {
        YScale::Logarithmic => (series.min_value() * 0.8)..(max * 1.25),
        YScale::Linear => 0.0..(max * 1.05),
    }
}

/// Minor grid positions between the `major` productivity labels
///
/// On a logarithmic axis: every `k·10^n` (k = 2..9) inside `bounds`.
/// On a linear axis: midpoints between consecutive majors.
pub fn minor_positions(major: &[f64], bounds: &Range<f64>, scale: YScale) -> Vec<f64> {
    match scale {
        YScale::Logarithmic => {
            if bounds.start <= 0.0 {
                return Vec::new();
            }
            let first_decade = bounds.start.log10().floor() as i32;
            let last_decade = bounds.end.log10().ceil() as i32;

            (first_decade..=last_decade)
                .flat_map(|n| (2..=9).map(move |k| k as f64 * 10f64.powi(n)))
                .filter(|y| *y >= bounds.start && *y <= bounds.end)
                .collect()
        }
        YScale::Linear => major.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect(),
    }
}

// =================================================================================================
// Dashes
// =================================================================================================

/// Split `[from, to]` into `dashes` dash intervals separated by equal gaps
///
/// With `log` set, the split is uniform in log10 space, so dashes look even on a
/// logarithmic axis. Both ends must then be positive.
pub fn dash_segments(from: f64, to: f64, dashes: usize, log: bool) -> Vec<(f64, f64)> {
    if dashes == 0 {
        return Vec::new();
    }

    let (a, b) = if log { (from.log10(), to.log10()) } else { (from, to) };
    let pieces = 2 * dashes - 1;
    let step = (b - a) / pieces as f64;
    let back = |v: f64| if log { 10f64.powf(v) } else { v };

    (0..dashes)
        .map(|i| {
            let start = a + step * (2 * i) as f64;
            (back(start), back(start + step))
        })
        .collect()
}

// =================================================================================================
// Labels
// =================================================================================================

/// Integer label with thousands separators, truncated toward zero
///
/// ```rust
/// use reactor_curves::output::visualization::axis::format_thousands;
///
/// assert_eq!(format_thousands(1_234_567.89), "1,234,567");
/// assert_eq!(format_thousands(0.4), "0");
/// ```
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let truncated = value.trunc() as i64;
    let digits = truncated.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if truncated < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =================================================================================================
// Tests
// =================================================================================================
