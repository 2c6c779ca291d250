//! Game balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 runs of 200 fights at 80%
//!   cargo run --bin simulate -- -n 50 -a 0.6      # 50 fights per run, 60% correct
//!   cargo run --bin simulate -- --seed 42 --mode crazy

use hugoland::core::game_mode::GameMode;
use hugoland::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HUGOLAND BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Fights per run: {}", config.fights_per_run);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Mode:           {}", config.mode.name());
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write {}: {}", filename, err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--fights" => {
                if i + 1 < args.len() {
                    config.fights_per_run = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-r" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    match parse_accuracy(&args[i + 1]) {
                        Some(accuracy) => config.accuracy = accuracy,
                        None => eprintln!("Invalid accuracy '{}', using 0.8", args[i + 1]),
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-m" | "--mode" => {
                if i + 1 < args.len() {
                    match GameMode::from_name(&args[i + 1]) {
                        Some(mode) => config.mode = mode,
                        None => eprintln!("Unknown mode '{}', using normal", args[i + 1]),
                    }
                    i += 1;
                }
            }
            "--no-spend" => {
                config.spend_income = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

/// A finite probability in [0, 1].
fn parse_accuracy(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && (0.0..=1.0).contains(a))
}

fn print_help() {
    println!("Hugoland Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --fights <N>    Fights per run (default: 200)");
    println!("    -r, --runs <R>      Number of runs (default: 100)");
    println!("    -a, --accuracy <A>  Chance of a correct answer, 0-1 (default: 0.8)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -m, --mode <M>      normal, blitz, bloodlust or crazy");
    println!("    --no-spend          Never spend coins or gems between fights");
    println!("    -v, --verbose       Print every run");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (10 runs of 50 fights)");
    println!("    -h, --help          Show this help");
}
