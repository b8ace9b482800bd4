//! Checkout simulator CLI
//!
//! Process bootstrap for the simulation engine: parses run parameters,
//! installs the logger, wires the engine to a JSON-file report store, then
//! drives one run - start, periodic status lines, stop, report.
//!
//! ```text
//! checkout-simulator [--checkouts N] [--intensity C] [--speed X]
//!                    [--duration-secs S] [--seed K] [--reports-file PATH]
//! ```

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use checkout_simulator_core_rs::{
    JsonFileStore, SimulationConfig, SimulationEngine, StartAck,
};
use log::info;

struct CliArgs {
    checkouts: u32,
    intensity: f64,
    speed: f64,
    duration_secs: u64,
    seed: Option<u64>,
    reports_file: PathBuf,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            checkouts: 3,
            intensity: 300.0,
            speed: 60.0,
            duration_secs: 10,
            seed: None,
            reports_file: PathBuf::from("reports.json"),
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--checkouts" => {
                parsed.checkouts = value(&flag)?
                    .parse()
                    .map_err(|e| format!("--checkouts: {e}"))?;
            }
            "--intensity" => {
                parsed.intensity = value(&flag)?
                    .parse()
                    .map_err(|e| format!("--intensity: {e}"))?;
            }
            "--speed" => {
                parsed.speed = value(&flag)?.parse().map_err(|e| format!("--speed: {e}"))?;
            }
            "--duration-secs" => {
                parsed.duration_secs = value(&flag)?
                    .parse()
                    .map_err(|e| format!("--duration-secs: {e}"))?;
            }
            "--seed" => {
                parsed.seed = Some(value(&flag)?.parse().map_err(|e| format!("--seed: {e}"))?);
            }
            "--reports-file" => {
                parsed.reports_file = PathBuf::from(value(&flag)?);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(parsed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!(
                "usage: checkout-simulator [--checkouts N] [--intensity C] [--speed X] \
                 [--duration-secs S] [--seed K] [--reports-file PATH]"
            );
            process::exit(2);
        }
    };

    let store = Arc::new(JsonFileStore::new(args.reports_file));
    let engine = SimulationEngine::new(store);

    let config = SimulationConfig {
        open_checkouts: args.checkouts,
        customer_intensity: args.intensity,
        simulation_speed: args.speed,
    };

    let ack = match args.seed {
        Some(seed) => engine.start_seeded(config, seed),
        None => engine.start(config),
    };
    if let StartAck::Started(accepted) = &ack {
        info!(
            "running for {}s wall-clock at speed x{}",
            args.duration_secs,
            accepted.effective_speed()
        );
    }

    for _ in 0..args.duration_secs {
        thread::sleep(Duration::from_secs(1));
        let status = engine.status();
        let busy = status.checkouts.iter().filter(|c| c.busy).count();
        println!(
            "[{}] queue {:>3}, {}/{} checkouts busy",
            status.current_time,
            status.queue_count,
            busy,
            status.checkouts.len()
        );
    }

    match engine.stop() {
        Some(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => println!("no run was active"),
    }

    let history = engine.reports()?;
    println!("{} report(s) on file", history.len());

    Ok(())
}
