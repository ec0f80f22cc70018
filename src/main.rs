use anyhow::Result;
use clap::Parser;

use skijump_sim::io::{csv, json};
use skijump_sim::sim::runner::simulate;
use skijump_sim::skier::presets;
use skijump_sim::types::Phase;

#[derive(Parser, Debug)]
#[command(version, about = "Three-phase ski jump trajectory simulation")]
struct Args {
    /// Output path for the per-step trajectory table
    #[arg(long, default_value = "jump_trajectory.csv")]
    trajectory_out: String,

    /// Output path for the run summary
    #[arg(long, default_value = "jump_summary.json")]
    summary_out: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // -----------------------------------------------------------------------
    // Scenario: Loitzl at the Whistler HS140 (the reference run)
    // -----------------------------------------------------------------------
    let params = presets::loitzl_whistler();
    let run = simulate(&params)?;
    let result = &run.result;

    let takeoff = run.trajectory.iter().rfind(|s| s.phase == Phase::OnTrack);
    let landing = run.trajectory.last();

    // -----------------------------------------------------------------------
    // Print report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SKI JUMP SIMULATION — Whistler HS140");
    println!("====================================================================");
    println!();
    println!("  Skier Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Body mass:     {:>8.1} kg    Ski mass:     {:>8.2} kg",
        params.body_mass, params.ski_mass
    );
    println!(
        "  Total mass:    {:>8.2} kg    Height:       {:>8.2} m",
        params.total_mass, params.height
    );
    println!(
        "  Area (body):   {:>8.3} m^2   Area (skis):  {:>8.3} m^2",
        params.frontal_area_body, params.frontal_area_skis
    );
    println!(
        "  Friction:      {:>8.3}       Air density:  {:>8.2} kg/m^3",
        params.friction_coeff, params.air_density
    );
    println!(
        "  Start:         {:>8.2} m     Step:         {:>8.4} s",
        params.start_position, params.dt
    );
    println!();

    println!("  Run Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if let Some(s) = takeoff {
        println!(
            "  TAKEOFF   t={:>6.2}s   x={:>7.2}m   vel={:>6.2}m/s ({:>5.1} km/h)",
            s.time,
            s.pos.x,
            result.takeoff_speed,
            result.takeoff_speed * 3.6
        );
    }
    if let Some(s) = landing {
        println!(
            "  LANDING   t={:>6.2}s   x={:>7.2}m   vel={:>6.2}m/s ({:>5.1} km/h)",
            s.time,
            s.pos.x,
            s.speed,
            s.speed * 3.6
        );
    }
    println!();

    println!("  Result");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Jump distance: {:>8.2} m", result.jump_distance);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>8}  {:>8}  {:>9}  {:>8}",
        "t (s)", "slope (m)", "x (m)", "y (m)", "vel (m/s)", "phase"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (run.trajectory.len() / 30).max(1);
    for (i, s) in run.trajectory.iter().enumerate() {
        let print = i % sample_interval == 0 || i == run.trajectory.len() - 1;
        if !print {
            continue;
        }
        let phase = match s.phase {
            Phase::OnTrack => "TRACK",
            Phase::Airborne => "FLIGHT",
        };
        println!(
            "  {:>7.2}  {:>9.2}  {:>8.2}  {:>8.2}  {:>9.2}  {:>8}",
            s.time, s.slope_dist, s.pos.x, s.pos.y, s.speed, phase
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s",
        run.trajectory.len(),
        params.dt
    );
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    csv::write_trajectory_file(&args.trajectory_out, &run.trajectory)?;
    json::write_summary_file(&args.summary_out, result)?;
    println!("Exported: {}, {}", args.trajectory_out, args.summary_out);

    Ok(())
}
