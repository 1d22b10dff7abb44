//! Example: Cycle Time Sweep
//!
//! How much does the batch changeover overhead cost, depending on how fast the
//! chemistry is? Renders one chart per overhead and prints the batch penalty
//! at a few reaction times.
//!
//! **Process**:
//! - Concentration: 150 g/L
//! - Cycle + dosing overhead: 0, 1, 5, 10, 24 h
//! - Visible window: 1 s .. ~50 h

use reactor_curves::{
    model::{BatchDosing, PlugFlow, ProcessParameters, ProductivityModel},
    output::{export_curves_csv, render_to_file, CsvConfig, CsvMetadata, PlotConfig},
    pipeline::{compute, ChartParameters, GridSettings},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Plug Flow vs Batch - Cycle Time Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    let concentration = 150.0; // g/L
    let window = (0.0, 180_000f64.log10());
    let cycle_times = [0.0, 1.0, 5.0, 10.0, 24.0]; // h
    let probes = [(60.0, "1 min"), (3600.0, "1 h"), (36_000.0, "10 h")];

    let tmp_dir = std::env::temp_dir();

    // ====== Batch penalty table ======

    print!("{:>10}", "cycle [h]");
    for (_, label) in probes {
        print!("{:>12}", label);
    }
    println!();

    for cycle in cycle_times {
        let params = ProcessParameters::new(concentration, cycle)?;
        print!("{:>10}", cycle);
        for (t, _) in probes {
            let plug = PlugFlow.productivity(t, &params).unwrap_or(f64::NAN);
            let batch = BatchDosing.productivity(t, &params).unwrap_or(f64::NAN);
            print!("{:>11.1}%", 100.0 * batch / plug);
        }
        println!();
    }
    println!();

    // ====== Charts ======

    for cycle in cycle_times {
        let start = Instant::now();

        let params = ChartParameters::new(concentration, cycle, true, window)?;
        let curves = compute(&params, &GridSettings::default())?;

        let chart_path = tmp_dir.join(format!("productivity_cycle_{}h.svg", cycle));
        let config = PlotConfig::productivity(format!("{} g/L, {} h cycle", concentration, cycle));
        render_to_file(&curves, chart_path.to_str().unwrap_or("productivity.svg"), Some(&config))?;

        println!(
            "  cycle {:>4} h → {} ({:.1} ms)",
            cycle,
            chart_path.display(),
            start.elapsed().as_secs_f64() * 1e3
        );

        if cycle == 5.0 {
            let csv_path = tmp_dir.join("productivity_cycle_5h.csv");
            let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_curves(&curves));
            export_curves_csv(&curves, csv_path.to_str().unwrap_or("productivity.csv"), Some(&csv_config))?;
            println!("                  {}", csv_path.display());
        }
    }

    Ok(())
}
