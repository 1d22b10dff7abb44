//! TOML configuration file support
//!
//! Every input of a recompute can be stored in a file instead of being passed
//! on the command line:
//!
//! ```toml
//! # reactor-curves.toml
//! [process]
//! concentration = 250.0   # g/L
//! cycle_time = 8.0        # h
//!
//! [axis]
//! log_scale_y = true
//! range_low = -2.0        # log10(s)
//! range_high = 4.56
//! invert = true
//!
//! [grid]
//! samples = 800           # 800-1000
//!
//! [plot]
//! width = 1600
//! height = 800
//! title = "Hydrogenation step"
//! ```
//!
//! Every key is optional; missing keys fall back to the library defaults.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CurveError, Result};
use crate::grid::Orientation;
use crate::model::ProcessParameters;
use crate::output::PlotConfig;
use crate::pipeline::{ChartParameters, GridSettings, DEFAULT_SAMPLES, DEFAULT_VISIBLE_RANGE};

/// Accepted `[grid] samples` values
pub const SAMPLE_BOUNDS: (usize, usize) = (800, 1000);

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub process: ProcessSection,

    #[serde(default)]
    pub axis: AxisSection,

    #[serde(default)]
    pub grid: GridSection,

    #[serde(default)]
    pub plot: PlotSection,
}

/// `[process]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSection {
    /// Product concentration \[g/L\]
    pub concentration: Option<f64>,

    /// Batch cycle overhead \[h\]
    pub cycle_time: Option<f64>,
}

/// `[axis]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisSection {
    pub log_scale_y: Option<bool>,

    /// Lower visible exponent, log10(s)
    pub range_low: Option<f64>,

    /// Upper visible exponent, log10(s)
    pub range_high: Option<f64>,

    /// Slow reactions on the left
    pub invert: Option<bool>,
}

/// `[grid]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSection {
    pub samples: Option<usize>,
}

/// `[plot]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// [`CurveError::Io`] if the file cannot be read, [`CurveError::Config`] if it
    /// is not valid TOML or holds an unknown key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = content.parse()?;
        log::debug!("config loaded from {}", path.display());
        Ok(config)
    }

    /// Checked chart inputs, defaults filled in
    ///
    /// # Errors
    ///
    /// Same as [`ChartParameters::new`].
    pub fn to_parameters(&self) -> Result<ChartParameters> {
        let defaults = ProcessParameters::default();

        ChartParameters::new(
            self.process.concentration.unwrap_or(defaults.concentration_g_per_l()),
            self.process.cycle_time.unwrap_or(defaults.cycle_time_h()),
            self.axis.log_scale_y.unwrap_or(true),
            (
                self.axis.range_low.unwrap_or(DEFAULT_VISIBLE_RANGE.0),
                self.axis.range_high.unwrap_or(DEFAULT_VISIBLE_RANGE.1),
            ),
        )
    }

    /// Grid resolution and orientation, defaults filled in
    ///
    /// # Errors
    ///
    /// [`CurveError::ParameterOutOfBounds`] if `samples` is outside [`SAMPLE_BOUNDS`].
    pub fn grid_settings(&self) -> Result<GridSettings> {
        let samples = self.grid.samples.unwrap_or(DEFAULT_SAMPLES);
        let (min, max) = SAMPLE_BOUNDS;
        if !(min..=max).contains(&samples) {
            return Err(CurveError::ParameterOutOfBounds {
                name: "samples",
                value: samples as f64,
                min: min as f64,
                max: max as f64,
            });
        }

        let orientation = match self.axis.invert {
            Some(false) => Orientation::Ascending,
            _ => Orientation::Descending,
        };

        Ok(GridSettings { samples, orientation })
    }

    /// Chart appearance, defaults filled in
    pub fn plot_config(&self) -> PlotConfig {
        let defaults = PlotConfig::default();
        PlotConfig::productivity(self.plot.title.clone()).size(
            self.plot.width.unwrap_or(defaults.width),
            self.plot.height.unwrap_or(defaults.height),
        )
    }
}

impl FromStr for AppConfig {
    type Err = CurveError;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::YScale;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [process]
            concentration = 250.0
            cycle_time = 8.0

            [axis]
            log_scale_y = false
            range_low = -1.0
            range_high = 3.5
            invert = false

            [grid]
            samples = 1000

            [plot]
            width = 1600
            height = 800
            title = "Hydrogenation step"
        "#;

        let config: AppConfig = toml.parse().unwrap();
        let params = config.to_parameters().unwrap();
        assert_eq!(params.process.concentration_g_per_l(), 250.0);
        assert_eq!(params.process.cycle_time_h(), 8.0);
        assert_eq!(params.y_scale, YScale::Linear);
        assert_eq!(params.visible_range.low(), -1.0);

        let settings = config.grid_settings().unwrap();
        assert_eq!(settings.samples, 1000);
        assert_eq!(settings.orientation, Orientation::Ascending);

        let plot = config.plot_config();
        assert_eq!((plot.width, plot.height), (1600, 800));
        assert_eq!(plot.title, "Hydrogenation step");
    }

    #[test]
    fn test_empty_config_gives_defaults() {
        let config: AppConfig = "".parse().unwrap();
        assert_eq!(config.to_parameters().unwrap(), ChartParameters::default());
        assert_eq!(config.grid_settings().unwrap(), GridSettings::default());
        assert_eq!(config.plot_config().title, PlotConfig::default().title);
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = "[process]\ncycle_time = 0.0\n".parse().unwrap();
        let params = config.to_parameters().unwrap();
        assert_eq!(params.process.cycle_time_h(), 0.0);
        assert_eq!(params.process.concentration_g_per_l(), 100.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<AppConfig> = "[process]\nconcentraton = 5.0\n".parse();
        assert!(matches!(result, Err(CurveError::Config(_))));
    }

    #[test]
    fn test_out_of_bounds_value_rejected_on_use() {
        let config: AppConfig = "[process]\nconcentration = 900.0\n".parse().unwrap();
        assert!(matches!(
            config.to_parameters(),
            Err(CurveError::ParameterOutOfBounds { name: "concentration_g_per_l", .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nsamples = 900").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_settings().unwrap().samples, 900);
    }

    #[test]
    fn test_sample_count_outside_bounds_rejected() {
        for toml in ["[grid]\nsamples = 42", "[grid]\nsamples = 5000"] {
            let config: AppConfig = toml.parse().unwrap();
            assert!(matches!(
                config.grid_settings(),
                Err(CurveError::ParameterOutOfBounds { name: "samples", .. })
            ));
        }
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load("/nonexistent/reactor-curves.toml"),
            Err(CurveError::Io(_))
        ));
    }
}
