//! Canonical time-axis ticks
//!
//! The time axis is labelled from a fixed table of human-meaningful durations,
//! from one millisecond to fifty hours. There is no "nice number" generator:
//! the table is authoritative and only filtered and ordered here.
//!
//! ```rust
//! use reactor_curves::grid::{select_ticks, Orientation, TimeRange};
//!
//! let visible = TimeRange::new(-2.0, 4.56)?;
//! let ticks = select_ticks(&visible, Orientation::Descending);
//!
//! assert_eq!(ticks.labels().first(), Some(&"10 h"));
//! assert_eq!(ticks.labels().last(), Some(&"10 ms"));
//! # Ok::<(), reactor_curves::CurveError>(())
//! ```

use super::{Orientation, TimeRange};

/// Canonical `(position [s], label)` table, ascending by position
pub const CANONICAL_TICKS: [(f64, &str); 20] = [
    (0.001, "1 ms"),
    (0.01, "10 ms"),
    (0.1, "100 ms"),
    (1.0, "1 s"),
    (2.0, "2 s"),
    (5.0, "5 s"),
    (10.0, "10 s"),
    (30.0, "30 s"),
    (60.0, "1 min"),
    (120.0, "2 min"),
    (300.0, "5 min"),
    (600.0, "10 min"),
    (1200.0, "20 min"),
    (1800.0, "30 min"),
    (3600.0, "1 h"),
    (7200.0, "2 h"),
    (18000.0, "5 h"),
    (36000.0, "10 h"),
    (86400.0, "24 h"),
    (180000.0, "50 h"),
];

/// One labelled position on the time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Position \[s\]
    pub position: f64,

    /// Display label
    pub label: &'static str,
}

/// Ticks selected for one render, in axis order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    ticks: Vec<Tick>,
}

impl TickSet {
    /// Selected ticks in axis order
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Positions in axis order \[s\]
    pub fn positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    /// Labels in axis order
    pub fn labels(&self) -> Vec<&'static str> {
        self.ticks.iter().map(|t| t.label).collect()
    }

    /// Label of the tick at `position`, if one was selected there
    pub fn label_for(&self, position: f64) -> Option<&'static str> {
        self.ticks
            .iter()
            .find(|t| ((t.position - position) / t.position).abs() < 1e-6)
            .map(|t| t.label)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Keep the canonical entries lying inside `visible` and order them for the axis
///
/// `Orientation::Descending` yields longest duration first (inverted axis),
/// `Orientation::Ascending` shortest first. A window that misses every entry
/// gives an empty set; the axis is then drawn unlabelled.
pub fn select_ticks(visible: &TimeRange, orientation: Orientation) -> TickSet {
    let mut ticks: Vec<Tick> = CANONICAL_TICKS
        .iter()
        .filter(|(position, _)| visible.contains(*position))
        .map(|&(position, label)| Tick { position, label })
        .collect();

    if orientation.is_inverted() {
        ticks.reverse();
    }

    if ticks.is_empty() {
        log::warn!(
            "no canonical tick inside 10^{:.2}..10^{:.2} s, time axis left unlabelled",
            visible.low(),
            visible.high()
        );
    }

    TickSet { ticks }
}

// =================================================================================================
// Tests
// =================================================================================================
