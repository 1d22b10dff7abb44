//! Plot configuration for productivity charts

use plotters::prelude::*;

/// Configuration for customizing the productivity chart
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Chart caption
/// - `xlabel`, `ylabel`: Axis descriptions
/// - `plug_flow_color`, `batch_color`: Curve colors
/// - `background`: Background color
/// - `line_width`: Curve thickness in pixels
/// - `show_grid`: Whether to draw the dashed major/minor grid
/// - `grid_color`: Base color of the grid (major lines are drawn darker than minor ones)
/// - `grid_dashes`: Number of dashes along one full axis length
/// - `y_labels`: Requested number of productivity-axis labels
///
/// # Example
///
/// ```rust,ignore
/// use reactor_curves::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::productivity("Enzymatic step");
/// config.batch_color = RED;
/// config.width = 1920;
/// config.height = 960;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Chart caption (default: "Plug Flow vs Batch Productivity")
    pub title: String,

    /// Time-axis description (default: "Chemical Reaction Time")
    pub xlabel: String,

    /// Productivity-axis description (default: "Industrial Productivity (t/y/m³)")
    pub ylabel: String,

    /// Plug-flow curve color (default: blue)
    pub plug_flow_color: RGBColor,

    /// Batch curve color (default: orange)
    pub batch_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Draw the dashed grid (default: true)
    pub show_grid: bool,

    /// Grid color (default: grey)
    pub grid_color: RGBColor,

    /// Dashes per full axis length (default: 120)
    pub grid_dashes: usize,

    /// Requested productivity-axis label count (default: 10)
    pub y_labels: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            title: "Plug Flow vs Batch Productivity".to_string(),
            xlabel: "Chemical Reaction Time".to_string(),
            ylabel: "Industrial Productivity (t/y/m³)".to_string(),
            plug_flow_color: RGBColor(31, 119, 180),
            batch_color: RGBColor(255, 127, 14),
            background: WHITE,
            line_width: 2,
            show_grid: true,
            grid_color: RGBColor(120, 120, 120),
            grid_dashes: 120,
            y_labels: 10,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Default chart with a custom caption
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::productivity("Hydrogenation, 250 g/L");
    /// let config = PlotConfig::productivity(NO_TITLE);
    /// ```
    pub fn productivity(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: hide the grid
    pub fn without_grid(mut self) -> Self {
        self.show_grid = false;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
