//! Visualization of productivity curves
//!
//! This module draws the pipeline output using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **axis**: Backend-free axis geometry (log time coordinate, grid positions, labels)
//! - **productivity**: The two-curve chart and the `ChartArtifact` it produces
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reactor_curves::pipeline::{compute, ChartParameters, GridSettings};
//! use reactor_curves::output::visualization::{render_chart, PlotConfig};
//!
//! let curves = compute(&ChartParameters::default(), &GridSettings::default())?;
//!
//! // In-memory SVG with default config
//! let chart = render_chart(&curves, &PlotConfig::default())?;
//!
//! // Or with a custom caption
//! let config = PlotConfig::productivity("Hydrogenation, 250 g/L");
//! let chart = render_chart(&curves, &config)?;
//! ```
//!
//! # Axis conventions
//!
//! | Axis | Scale | Labels |
//! |------|-------|--------|
//! | Reaction time | always log10, inverted for descending grids | canonical tick table only |
//! | Productivity | log or linear (`YScale`) | thousands-grouped integers |

pub mod config;
pub mod axis;
pub mod productivity;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use productivity::{render_chart, render_to_file, ChartArtifact};
