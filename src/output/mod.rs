//! Output module for productivity curves
//!
//! This module provides tools to hand pipeline results to the outside world:
//! - **Visualization**: SVG/PNG charts using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── axis.rs
//! │   └── productivity.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reactor_curves::output::{render_chart, export_curves_csv, PlotConfig};
//!
//! let chart = render_chart(&curves, &PlotConfig::default())?;
//! export_curves_csv(&curves, "curves.csv", None)?;
//! ```
//!
//! Both sub-modules only read a `ProductivityCurves`; neither keeps state.

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{
    render_chart,
    render_to_file,
    ChartArtifact,
    PlotConfig,
};

pub use export::{
    export_curves_csv,
    CsvConfig,
    CsvExporter,
    CsvMetadata,
    Exporter,
};
