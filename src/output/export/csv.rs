//! CSV export of productivity curves
//!
//! Writes the time grid and both reactor series to CSV, readable by Excel,
//! pandas, MATLAB and most data analysis tools.
//!
//! # Features
//!
//! - **Fixed columns**: `time_s`, `time_h`, `plug_flow`, `batch`, in grid order
//! - **Metadata support**: Optional `#` header with the process parameters
//! - **Customizable**: Delimiter, decimal separator, precision
//! - **Validation**: Rejects empty, mismatched or non-finite data
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use reactor_curves::output::export::export_curves_csv;
//!
//! export_curves_csv(&curves, "curves.csv", None)?;
//! ```
//!
//! **Output** (`curves.csv`, descending grid):
//! ```csv
//! time_s,time_h,plug_flow,batch
//! 36307.805477,10.085502,86.857356,58.069001
//! ...
//! 0.010000,0.000003,315360000.000000,175.199903
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use reactor_curves::output::export::{export_curves_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_curves(&curves));
//! export_curves_csv(&curves, "curves.csv", Some(&config))?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Reactor Productivity Curves
//! # Generated: 2026-10-18T09:12:00+00:00
//! # Concentration: 100 g/L
//! # Cycle Time: 5 h
//! # Visible Range: 10^-2 s .. 10^4.56 s
//! # Samples: 800
//! # Unit: t/y/m³
//! #
//! time_s,time_h,plug_flow,batch
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use super::{downsample_indices, Exporter};
use crate::error::{CurveError, Result};
use crate::model::{PRODUCTIVITY_UNIT, SECONDS_PER_HOUR};
use crate::pipeline::ProductivityCurves;

/// Column names, in file order
pub const COLUMNS: [&str; 4] = ["time_s", "time_h", "plug_flow", "batch"];

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: '\t',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format: `;` between columns, `,` as decimal point
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only the fields that are set are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Product concentration \[g/L\]
    pub concentration_g_per_l: Option<f64>,

    /// Batch cycle overhead \[h\]
    pub cycle_time_h: Option<f64>,

    /// Visible window exponents (low, high)
    pub range: Option<(f64, f64)>,

    /// Number of grid samples
    pub samples: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing one compute pass
    pub fn from_curves(curves: &ProductivityCurves) -> Self {
        let range = curves.visible_range();
        Self {
            concentration_g_per_l: Some(curves.process.concentration_g_per_l()),
            cycle_time_h: Some(curves.process.cycle_time_h()),
            range: Some((range.low(), range.high())),
            samples: Some(curves.grid.len()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<()> {
    writeln!(out, "# Reactor Productivity Curves")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(c) = metadata.concentration_g_per_l {
        writeln!(out, "# Concentration: {} g/L", c)?;
    }
    if let Some(cycle) = metadata.cycle_time_h {
        writeln!(out, "# Cycle Time: {} h", cycle)?;
    }
    if let Some((low, high)) = metadata.range {
        writeln!(out, "# Visible Range: 10^{} s .. 10^{} s", low, high)?;
    }
    if let Some(samples) = metadata.samples {
        writeln!(out, "# Samples: {}", samples)?;
    }
    writeln!(out, "# Unit: {}", PRODUCTIVITY_UNIT)?;

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate(curves: &ProductivityCurves) -> Result<()> {
    let n = curves.grid.len();

    if n == 0 || curves.series.is_empty() {
        return Err(CurveError::Export("Empty data: grid and series must not be empty".into()));
    }

    if curves.series.len() != n {
        return Err(CurveError::Export(format!(
            "Data length mismatch: {} time samples versus {} productivity values",
            n,
            curves.series.len()
        )));
    }

    if curves.grid.iter().any(|t| !t.is_finite()) {
        return Err(CurveError::Export("Invalid data: NaN or Inf detected in time grid".into()));
    }

    for (name, values) in [("plug_flow", curves.series.plug_flow()), ("batch", curves.series.batch())] {
        if values.iter().any(|p| !p.is_finite()) {
            return Err(CurveError::Export(format!(
                "Invalid data: NaN or Inf detected in {} series",
                name
            )));
        }
    }

    Ok(())
}

fn write_rows(
    curves: &ProductivityCurves,
    indices: &[usize],
    output_path: &str,
    configuration: &CsvConfig,
) -> Result<()> {
    validate(curves)?;

    let mut out = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata)?;
        }
    }

    let delimiter = configuration.delimiter.to_string();
    writeln!(out, "{}", COLUMNS.join(delimiter.as_str()))?;

    let times = curves.grid.as_slice();
    let plug_flow = curves.series.plug_flow();
    let batch = curves.series.batch();

    for &i in indices {
        let row = [times[i], times[i] / SECONDS_PER_HOUR, plug_flow[i], batch[i]]
            .map(|v| format_number(v, configuration));
        writeln!(out, "{}", row.join(delimiter.as_str()))?;
    }

    out.flush()?;
    log::info!("{} rows exported to {}", indices.len(), output_path);
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export every grid sample of `curves` to CSV
///
/// Rows follow the grid order, so a descending grid gives a descending `time_s`
/// column.
///
/// # Errors
///
/// - [`CurveError::Export`] on empty, mismatched or non-finite data
/// - [`CurveError::Io`] if the file cannot be created or written
///
/// # Example
///
/// ```rust,ignore
/// export_curves_csv(&curves, "curves.csv", Some(&CsvConfig::european()))?;
/// ```
pub fn export_curves_csv(
    curves: &ProductivityCurves,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let indices: Vec<usize> = (0..curves.grid.len()).collect();
    write_rows(curves, &indices, output_path, configuration)
}

/// [`Exporter`] writing CSV files with a fixed [`CsvConfig`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CurveError;

    fn export(
        &self,
        curves: &ProductivityCurves,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<()> {
        let len = curves.grid.len();
        let indices = match n_points {
            Some(n) => downsample_indices(len, n)?,
            None => (0..len).collect(),
        };
        write_rows(curves, &indices, path, &self.config)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
