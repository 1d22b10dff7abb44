//! Export module for productivity curves.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a new
//! format is a new file next to [`csv`].
//!
//! # Available formats
//!
//! | Format  | Module   |
//! |---------|----------|
//! | CSV     | [`csv`]  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use reactor_curves::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Every grid sample
//! exporter.export(&curves, None, "curves.csv")?;
//!
//! // Downsampled to 100 rows
//! exporter.export(&curves, Some(100), "curves_light.csv")?;
//! ```

pub mod csv;

pub use csv::{export_curves_csv, CsvConfig, CsvExporter, CsvMetadata};

use crate::error::{CurveError, Result};
use crate::pipeline::ProductivityCurves;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format reports its own error type, so callers can match on it without
/// going through `Box<dyn Error>`.
///
/// # Parameter `n_points`
///
/// - `None`: exports every grid sample
/// - `Some(n)`: keeps `n` evenly spaced samples, always including the **first
///   and last** ones so that both ends of the visible window survive;
///   `n < 2` is rejected
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Write the time grid and both productivity series to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `curves` holds non-finite values
    /// - `n_points` is `Some(n)` with `n < 2`
    fn export(
        &self,
        curves: &ProductivityCurves,
        n_points: Option<usize>,
        path: &str,
    ) -> std::result::Result<(), Self::Error>;
}

/// Indices of `n` evenly spaced samples out of `len`, first and last included
///
/// Returns every index when `n >= len`. Fewer than two points cannot hold both
/// ends and fail with [`CurveError::Export`].
pub(crate) fn downsample_indices(len: usize, n: usize) -> Result<Vec<usize>> {
    if n < 2 {
        return Err(CurveError::Export(format!(
            "Downsampling needs at least 2 points to keep both ends, got {}",
            n
        )));
    }
    if n >= len {
        return Ok((0..len).collect());
    }

    let last = len - 1;
    let mut indices: Vec<usize> = (0..n)
        .map(|i| (i as f64 * last as f64 / (n - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_keeps_ends() {
        let idx = downsample_indices(800, 5).unwrap();
        assert_eq!(idx.len(), 5);
        assert_eq!(idx[0], 0);
        assert_eq!(idx[4], 799);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_downsample_passthrough() {
        assert_eq!(downsample_indices(4, 10).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(downsample_indices(4, 2).unwrap(), vec![0, 3]);
    }

    #[test]
    fn test_downsample_rejects_fewer_than_two_points() {
        assert!(matches!(downsample_indices(800, 1), Err(CurveError::Export(_))));
        assert!(matches!(downsample_indices(800, 0), Err(CurveError::Export(_))));
    }
}
