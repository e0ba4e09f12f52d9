//! Headless round simulator CLI.
//!
//! Plays many rounds with the autopilot to see how a config plays.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 random rounds
//!   cargo run --bin simulate -- -n 100 --seed 42     # Reproducible batch
//!   cargo run --bin simulate -- --config hard.json   # Try a custom config

use flapper::core::GameConfig;
use flapper::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let CliArgs {
        mut config,
        config_path,
        json,
    } = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = config_path {
        match GameConfig::load(&path) {
            Ok(game) => config.game = game,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 FLAPPER ROUND SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Time:       {}s", config.max_time_per_run);
    println!("  Step:           {:.4}s", config.game.physics_step);
    println!("  Gap / Speed:    {} / {}", config.game.pipe_gap, config.game.pipe_speed);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let written = report
            .to_json()
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(&filename, json));
        match written {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
struct CliArgs {
    config: SimConfig,
    config_path: Option<PathBuf>,
    json: bool,
}

/// Parse arguments. `--quick` only supplies defaults, so explicit flags win
/// wherever they appear.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut quick = false;
    let mut runs = None;
    let mut seed = None;
    let mut max_time = None;
    let mut verbosity = None;
    let mut config_path = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                runs = Some(parse_value::<u32>(flag, args.get(i + 1))?);
                i += 1;
            }
            "-s" | "--seed" => {
                seed = Some(parse_value::<u64>(flag, args.get(i + 1))?);
                i += 1;
            }
            "-t" | "--max-time" => {
                let secs = parse_value::<f64>(flag, args.get(i + 1))?;
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(format!("Invalid value for {}: must be positive", flag));
                }
                max_time = Some(secs);
                i += 1;
            }
            "-c" | "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| format!("Missing value for {}", flag))?;
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "-v" | "--verbose" => verbosity = Some(2),
            "-q" | "--quiet" => verbosity = Some(0),
            "--quick" => quick = true,
            "--json" => json = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    let mut config = if quick {
        SimConfig::quick(seed.unwrap_or(0))
    } else {
        SimConfig::default()
    };
    if let Some(runs) = runs {
        config.num_runs = runs;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(max_time) = max_time {
        config.max_time_per_run = max_time;
    }
    if let Some(verbosity) = verbosity {
        config.verbosity = verbosity;
    }

    Ok(CliArgs {
        config,
        config_path,
        json,
    })
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn print_help() {
    println!("Flapper Round Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>        Number of rounds (default: 1000)");
    println!("  -s, --seed <N>        Random seed for reproducibility");
    println!("  -t, --max-time <S>    Simulated seconds per round cap (default: 300)");
    println!("  -c, --config <PATH>   Game config JSON file");
    println!("  -v, --verbose         Print every round");
    println!("  -q, --quiet           Skip the text report");
    println!("  --quick               Default to 50 rounds, seed 0, 60s cap");
    println!("  --json                Save JSON report to file");
    println!("  -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG=debug for per-round log lines on stderr.");
}
