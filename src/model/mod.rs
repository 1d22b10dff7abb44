//! Reactor productivity models
//!
//! All reactor modes implement the [`ProductivityModel`] trait. A model only
//! knows its formula; the time grid knows the domain. [`ProductivitySeries`]
//! applies both modes over one grid for plotting or export.
//!
//! # Available Models
//!
//! ## [`PlugFlow`]: continuous
//!
//! Annualized output inversely proportional to residence time: the shorter the
//! reaction, the higher the throughput.
//!
//! ## [`BatchDosing`]: discrete cycles
//!
//! Same annualization, but each cycle adds a fixed dosing/changeover time to the
//! reaction time. With a zero overhead it coincides exactly with [`PlugFlow`].
//!
//! # Example
//!
//! ```rust
//! use reactor_curves::model::{PlugFlow, ProcessParameters, ProductivityModel};
//!
//! let params = ProcessParameters::new(100.0, 10.0)?;
//! let p = PlugFlow.productivity(3600.0, &params).unwrap();
//! assert!((p - 876.0).abs() < 1e-9);
//! # Ok::<(), reactor_curves::CurveError>(())
//! ```

pub mod traits;
pub mod reactors;
pub mod series;

pub use traits::{
    ProcessParameters,
    ProductivityModel,
    CONCENTRATION_BOUNDS,
    CYCLE_TIME_BOUNDS,
    PRODUCTIVITY_UNIT,
    SECONDS_PER_HOUR,
};
pub use reactors::{BatchDosing, PlugFlow};
pub use series::ProductivitySeries;
