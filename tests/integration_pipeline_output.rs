//! Integration tests: pipeline + output + config
//!
//! These tests drive the crate the way the binary does: parameters from a
//! config file, one compute pass, then a chart and a CSV written to disk.

use std::fs;
use std::io::Write;

use reactor_curves::config::AppConfig;
use reactor_curves::grid::{Orientation, TimeGrid, TimeRange, CANONICAL_TICKS};
use reactor_curves::model::{PlugFlow, ProcessParameters, ProductivityModel};
use reactor_curves::output::export::{CsvExporter, Exporter};
use reactor_curves::output::{export_curves_csv, render_chart, render_to_file, CsvConfig, PlotConfig};
use reactor_curves::pipeline::{compute, render, render_with_curves, ChartParameters, GridSettings};
use reactor_curves::CurveError;

mod common;
use common::{curves_for, relative_error, text_x, ContinuousStirredTank, FixedOutput};

// =================================================================================================
// Custom reactor modes through the trait
// =================================================================================================

#[test]
fn test_custom_model_evaluates_every_sample() {
    let range = TimeRange::new(0.0, 2.0).unwrap();
    let grid = TimeGrid::generate(range, 50, Orientation::Descending).unwrap();

    let values = FixedOutput { value: 42.0 }.evaluate(&grid, &ProcessParameters::default());
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|v| *v == 42.0));
}

#[test]
fn test_stirred_tank_against_plug_flow() {
    let params = ProcessParameters::new(100.0, 0.0).unwrap();
    let tank = ContinuousStirredTank { stages: 4.0 };

    let p = PlugFlow.productivity(3600.0, &params).unwrap();
    let c = tank.productivity(3600.0, &params).unwrap();
    assert!(relative_error(c, p / 4.0) < 1e-12);
    assert!(tank.productivity(0.0, &params).is_none());
}

// =================================================================================================
// Render
// =================================================================================================

#[test]
fn test_render_default_chart() {
    let chart = render(
        &ChartParameters::default(),
        &GridSettings::default(),
        &PlotConfig::default(),
    )
    .unwrap();

    let svg = chart.as_svg();
    assert!(svg.contains("Chemical Reaction Time"));
    assert!(svg.contains("10 h"));
    assert!(svg.contains("100 ms"));
    assert!(!svg.contains("24 h"));
}

#[test]
fn test_default_chart_puts_slow_reactions_left() {
    let params = ChartParameters::default();
    let settings = GridSettings::default();
    let (curves, chart) = render_with_curves(&params, &settings, &PlotConfig::default()).unwrap();
    let svg = chart.as_svg();

    let hours = text_x(svg, "10 h").expect("10 h label drawn");
    let millis = text_x(svg, "10 ms").expect("10 ms label drawn");
    assert!(hours < millis, "10 h at x={} should be left of 10 ms at x={}", hours, millis);

    // Labels follow the tick order: strictly left to right
    let xs: Vec<f64> = curves
        .ticks
        .labels()
        .iter()
        .map(|label| text_x(svg, label).expect("tick label drawn"))
        .collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_ascending_chart_puts_fast_reactions_left() {
    let settings = GridSettings { orientation: Orientation::Ascending, ..GridSettings::default() };
    let chart = render(&ChartParameters::default(), &settings, &PlotConfig::default()).unwrap();
    let svg = chart.as_svg();

    let hours = text_x(svg, "10 h").expect("10 h label drawn");
    let millis = text_x(svg, "10 ms").expect("10 ms label drawn");
    assert!(millis < hours, "10 ms at x={} should be left of 10 h at x={}", millis, hours);
}

#[test]
fn test_chart_draws_exactly_the_selected_time_labels() {
    for orientation in [Orientation::Descending, Orientation::Ascending] {
        let settings = GridSettings { orientation, ..GridSettings::default() };
        let (curves, chart) =
            render_with_curves(&ChartParameters::default(), &settings, &PlotConfig::default()).unwrap();
        let svg = chart.as_svg();
        let selected = curves.ticks.labels();

        for (_, label) in CANONICAL_TICKS {
            let drawn = svg.contains(&format!(">{}</text>", label));
            assert_eq!(
                drawn,
                selected.contains(&label),
                "label {:?} drawn={} with {:?}",
                label, drawn, orientation
            );
        }
    }
}

#[test]
fn test_render_with_curves_matches_compute() {
    let params = ChartParameters::new(250.0, 8.0, false, (-1.0, 3.0)).unwrap();
    let settings = GridSettings::default();

    let (curves, chart) = render_with_curves(&params, &settings, &PlotConfig::default()).unwrap();
    assert_eq!(curves, compute(&params, &settings).unwrap());
    assert_eq!(chart, render_chart(&curves, &PlotConfig::default()).unwrap());
}

#[test]
fn test_render_is_repeatable() {
    let curves = curves_for(100.0, 5.0, (-2.0, 4.56), 300);
    let a = render_chart(&curves, &PlotConfig::default()).unwrap();
    let b = render_chart(&curves, &PlotConfig::default()).unwrap();
    assert_eq!(a.as_svg(), b.as_svg());
}

#[test]
fn test_render_to_missing_directory_fails() {
    let curves = curves_for(100.0, 5.0, (-2.0, 4.56), 100);
    let result = render_to_file(&curves, "/nonexistent/dir/chart.png", None);
    assert!(matches!(result, Err(CurveError::Render(_))));
}

// =================================================================================================
// Config → compute → files
// =================================================================================================

#[test]
fn test_config_file_to_chart_and_csv() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("plant.toml");
    let mut file = fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        "[process]\nconcentration = 200.0\ncycle_time = 2.0\n\n\
         [axis]\nrange_low = 0.0\nrange_high = 4.0\ninvert = false\n\n\
         [grid]\nsamples = 900\n\n\
         [plot]\nwidth = 640\nheight = 320"
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    let curves = compute(&config.to_parameters().unwrap(), &config.grid_settings().unwrap()).unwrap();
    assert_eq!(curves.grid.len(), 900);
    assert_eq!(curves.grid.orientation(), Orientation::Ascending);

    let svg_path = dir.path().join("chart.svg");
    render_to_file(&curves, svg_path.to_str().unwrap(), Some(&config.plot_config())).unwrap();
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("640"));
    assert!(svg.contains("1 min"));

    let csv_path = dir.path().join("curves.csv");
    export_curves_csv(&curves, csv_path.to_str().unwrap(), None).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 901);

    // t = 1 s, 200 g/L: 0.2 kg/L / (1/3600 h) · 8760 h
    let first: Vec<f64> = csv.lines().nth(1).unwrap().split(',').map(|v| v.parse().unwrap()).collect();
    assert!(relative_error(first[2], 0.2 * 3600.0 * 8760.0) < 1e-9);
}

#[test]
fn test_descending_export_keeps_grid_order() {
    let params = ChartParameters::default();
    let curves = compute(&params, &GridSettings::default()).unwrap();

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();
    CsvExporter::new(CsvConfig::high_precision()).export(&curves, Some(10), path).unwrap();

    let times: Vec<f64> = fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(times.len(), 10);
    assert!(times.windows(2).all(|w| w[0] > w[1]));
}
