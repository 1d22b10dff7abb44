//! Error types shared by every stage of the productivity pipeline

/// Errors raised while building, evaluating, rendering or exporting curves
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// The time window is empty, inverted, or maps to a non-positive/non-finite time
    #[error("Invalid time range: 10^{low} s .. 10^{high} s (need low < high and finite positive bounds)")]
    InvalidRange {
        /// Lower base-10 exponent (seconds)
        low: f64,
        /// Upper base-10 exponent (seconds)
        high: f64,
    },

    /// A time grid needs at least its two endpoints
    #[error("Invalid sample count: {0} (need at least 2)")]
    InvalidSampleCount(usize),

    /// A process or axis parameter lies outside its declared domain
    #[error("Parameter '{name}' = {value} is outside [{min}, {max}]")]
    ParameterOutOfBounds {
        /// Parameter name as exposed to the user
        name: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Drawing backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// Data rejected by an exporter
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, CurveError>;

impl From<toml::de::Error> for CurveError {
    fn from(err: toml::de::Error) -> Self {
        CurveError::Config(err.to_string())
    }
}
