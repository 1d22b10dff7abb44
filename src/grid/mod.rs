//! Logarithmic reaction-time domain
//!
//! This module owns everything that lives on the time axis:
//!
//! - [`TimeRange`]: a base-10 exponent window in seconds, validated on construction
//! - [`Orientation`]: ascending (fast reactions first) or descending (slow reactions first)
//! - [`TimeGrid`]: the dense, log-spaced sample sequence fed to the productivity models
//! - [`ticks`]: the canonical tick table and the selection of legible axis labels
//!
//! # Why exponents?
//!
//! The public input is the pair of exponents, never raw seconds. A bound of
//! zero or a negative time cannot be expressed, so both productivity formulas
//! are always evaluated on `t > 0`.
//!
//! # Example
//!
//! ```rust
//! use reactor_curves::grid::{Orientation, TimeGrid, TimeRange};
//!
//! let range = TimeRange::new(-2.0, 4.56)?;
//! let grid = TimeGrid::generate(range, 800, Orientation::Descending)?;
//!
//! assert_eq!(grid.len(), 800);
//! assert!(grid.first() > grid.last());
//! # Ok::<(), reactor_curves::CurveError>(())
//! ```

pub mod ticks;

use nalgebra::DVector;

use crate::error::{CurveError, Result};

pub use ticks::{select_ticks, Tick, TickSet, CANONICAL_TICKS};

/// Default window exponents: 10 ms to about 10 h
pub const DEFAULT_EXPONENTS: (f64, f64) = (-2.0, 4.56);

/// Relative tolerance used when testing whether a time lies on a range bound
pub(crate) const BOUND_TOLERANCE: f64 = 1e-9;

// =================================================================================================
// Time Range
// =================================================================================================

/// Base-10 logarithmic time window, in seconds
///
/// Holds `(low, high)` exponents so that the window spans `10^low ..= 10^high` seconds.
///
/// # Invariants
///
/// - `low < high`
/// - `10^low` and `10^high` are both positive and finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    low: f64,
    high: f64,
}

impl TimeRange {
    /// Build a range from its two exponents
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidRange`] if `low >= high`, if either exponent is NaN/infinite,
    /// or if either bound underflows to zero / overflows to infinity once exponentiated.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let invalid = CurveError::InvalidRange { low, high };

        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(invalid);
        }

        let (min_s, max_s) = (10f64.powf(low), 10f64.powf(high));
        if !(min_s > 0.0 && min_s.is_finite() && max_s > 0.0 && max_s.is_finite()) {
            return Err(invalid);
        }

        Ok(Self { low, high })
    }

    /// Lower exponent
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper exponent
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Shortest time in the window \[s\]
    pub fn min_seconds(&self) -> f64 {
        10f64.powf(self.low)
    }

    /// Longest time in the window \[s\]
    pub fn max_seconds(&self) -> f64 {
        10f64.powf(self.high)
    }

    /// Number of decades covered
    pub fn decades(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `seconds` lies inside the closed window
    ///
    /// Bounds are compared with a small relative tolerance so that a canonical
    /// position sitting exactly on an edge (e.g. `10^0 = 1 s`) is kept.
    pub fn contains(&self, seconds: f64) -> bool {
        let min = self.min_seconds() * (1.0 - BOUND_TOLERANCE);
        let max = self.max_seconds() * (1.0 + BOUND_TOLERANCE);
        seconds >= min && seconds <= max
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_EXPONENTS.0,
            high: DEFAULT_EXPONENTS.1,
        }
    }
}

// =================================================================================================
// Orientation
// =================================================================================================

/// Ordering of values along the time axis
///
/// `Descending` is the inverted-axis convention: slow reactions on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Small → large
    Ascending,

    /// Large → small
    #[default]
    Descending,
}

impl Orientation {
    /// `true` for the inverted (slow-on-the-left) convention
    pub fn is_inverted(&self) -> bool {
        matches!(self, Orientation::Descending)
    }
}

// =================================================================================================
// Time Grid
// =================================================================================================

/// Ordered, log-spaced time samples \[s\]
///
/// Only [`TimeGrid::generate`] can build one, so every value is strictly positive
/// and the sequence is monotonic in the stored [`Orientation`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    seconds: DVector<f64>,
    range: TimeRange,
    orientation: Orientation,
}

impl TimeGrid {
    /// Generate `samples` log-spaced times between `10^low` and `10^high`, endpoints included
    ///
    /// Each sample is `10^(low + i·(high - low)/(samples - 1))`. The endpoints are
    /// written as `10^low` / `10^high` directly so they carry no interpolation error.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidSampleCount`] if `samples < 2`.
    pub fn generate(range: TimeRange, samples: usize, orientation: Orientation) -> Result<Self> {
        if samples < 2 {
            return Err(CurveError::InvalidSampleCount(samples));
        }

        let last = samples - 1;
        let step = range.decades() / last as f64;

        let mut seconds = DVector::from_fn(samples, |i, _| {
            if i == last {
                range.max_seconds()
            } else {
                10f64.powf(range.low() + step * i as f64)
            }
        });

        if orientation.is_inverted() {
            seconds = DVector::from_iterator(samples, seconds.iter().rev().copied());
        }

        log::debug!(
            "time grid: {} samples, 10^{:.2}..10^{:.2} s, {:?}",
            samples,
            range.low(),
            range.high(),
            orientation
        );

        Ok(Self { seconds, range, orientation })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// Always `false`: a grid holds at least two samples
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// Samples as a slice \[s\]
    pub fn as_slice(&self) -> &[f64] {
        self.seconds.as_slice()
    }

    /// Samples as a vector \[s\]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.seconds
    }

    /// Samples converted to hours
    pub fn hours(&self) -> DVector<f64> {
        self.seconds.map(|t| t / 3600.0)
    }

    /// First sample in grid order
    pub fn first(&self) -> f64 {
        self.seconds[0]
    }

    /// Last sample in grid order
    pub fn last(&self) -> f64 {
        self.seconds[self.seconds.len() - 1]
    }

    /// Range the grid was generated from
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Ordering of the samples
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate over samples in grid order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.seconds.as_slice().iter()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
