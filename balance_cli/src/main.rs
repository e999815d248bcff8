//! # Lineflow CLI Demo
//!
//! Terminal front end for the line-balance calculator. Prompts for the two
//! production parameters, runs the starter stations through the calculator,
//! and prints a per-station report.
//!
//! Pass `--json` to also dump the derived result set as pretty JSON.
//! Set `RUST_LOG=debug` for calculation tracing.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use balance_core::calculations::balance::calculate;
use balance_core::line::LineConfig;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let json_output = std::env::args().any(|a| a == "--json");

    println!("Lineflow CLI - Line-Balance Calculator");
    println!("======================================");
    println!();

    let working_hours = prompt_f64("Working hours per day [8.0]: ", 8.0);
    let daily_demand = prompt_f64("Daily demand in units [480.0]: ", 480.0);

    let mut line = LineConfig::starter();
    if let Err(e) = line.set_working_hours(working_hours) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = line.set_daily_demand(daily_demand) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    debug!(
        stations = line.station_count(),
        working_hours, daily_demand, "calculating line balance"
    );

    match calculate(&line) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  LINE BALANCE RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Takt time: {:.1} s/unit", result.takt_time_s);
            println!();
            println!("Stations:");
            for station in &result.stations {
                println!(
                    "  {:<12} cycle {:>6.1} s  operators {:>2}  {}",
                    station.name,
                    station.cycle_time_s,
                    station.operators,
                    if station.within_takt() {
                        "within takt"
                    } else {
                        "OVER TAKT"
                    }
                );
            }
            println!();
            println!("Total operators required: {}", result.total_operators);
            if let Some(bottleneck) = result.bottleneck() {
                println!("Bottleneck: {} ({:.1} s)", bottleneck.name, bottleneck.cycle_time_s);
            }
            println!("═══════════════════════════════════════");

            if json_output {
                println!();
                if let Ok(json) = serde_json::to_string_pretty(&result) {
                    println!("{}", json);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
