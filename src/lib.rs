//! reactor-curves: Plug Flow vs Batch Productivity
//!
//! Compares the annualized productivity of a continuous plug-flow reactor with a
//! batch reactor that pays a fixed dosing/changeover overhead per cycle, over a
//! reaction-time axis spanning milliseconds to days.
//!
//! # Architecture
//!
//! One pure pipeline, recomputed from scratch on every parameter change:
//!
//! 1. **Grid**: log-spaced reaction times over a validated exponent window
//! 2. **Model**: both reactor formulas evaluated sample by sample
//! 3. **Ticks**: legible labels picked from a fixed canonical table
//! 4. **Output**: a plotters chart (SVG/PNG) and a CSV export
//!
//! # Quick Start
//!
//! ```rust
//! use reactor_curves::pipeline::{compute, ChartParameters, GridSettings};
//!
//! // 100 g/L, 5 h cycle overhead, log productivity axis, 10 ms .. ~10 h
//! let params = ChartParameters::new(100.0, 5.0, true, (-2.0, 4.56))?;
//! let curves = compute(&params, &GridSettings::default())?;
//!
//! assert_eq!(curves.grid.len(), 800);
//! assert!(curves.ticks.labels().contains(&"1 h"));
//! # Ok::<(), reactor_curves::CurveError>(())
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Time range, log-spaced grid, canonical ticks
//! - [`model`]: Reactor productivity formulas
//! - [`pipeline`]: Input bundle and compute/render entry points
//! - [`output`]: Chart rendering and CSV export
//! - [`config`]: TOML configuration file
//! - [`error`]: Error type shared by every stage

pub mod error;

// Core modules
pub mod grid;
pub mod model;
pub mod pipeline;

pub mod output;
pub mod config;

pub use error::{CurveError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use reactor_curves::prelude::*;
    //! ```
    pub use crate::error::{CurveError, Result};
    pub use crate::grid::{select_ticks,
                          Orientation,
                          TickSet,
                          TimeGrid,
                          TimeRange};
    pub use crate::model::{BatchDosing,
                           PlugFlow,
                           ProcessParameters,
                           ProductivityModel,
                           ProductivitySeries};
    pub use crate::pipeline::{compute,
                              render,
                              ChartParameters,
                              GridSettings,
                              ProductivityCurves,
                              YScale};
    pub use crate::output::{render_chart,
                            export_curves_csv,
                            ChartArtifact,
                            PlotConfig};
}
