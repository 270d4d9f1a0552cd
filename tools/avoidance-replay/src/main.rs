//! avoidance-replay: run recorded or synthetic update frames through the engine.
//!
//! Usage:
//!   avoidance-replay replay --input frames.jsonl [--config engine.json]
//!   avoidance-replay synthetic --count 1000 --seed 7
//!   avoidance-replay sample

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use avoidance_core::config::EngineConfig;
use avoidance_core::enums::RiskLevel;
use avoidance_core::inputs::{Obstacle, TerrainInput, TrackReport, WeatherInput};
use avoidance_core::state::UpdateFrame;
use avoidance_core::types::Vector3;
use avoidance_fusion::AvoidanceEngine;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "replay" => cmd_replay(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "sample" => cmd_sample(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        "avoidance-replay: collision avoidance risk engine driver\n\
         \n\
         Commands:\n\
         \n\
         replay    Process recorded update frames (one JSON object per line)\n\
         \n\
           --input <path>     JSONL file of update frames\n\
           --config <path>    Engine configuration JSON (optional)\n\
         \n\
         synthetic Generate random encounters and summarise risk levels\n\
         \n\
           --count <N>        Number of encounters (default: 1000)\n\
           --seed <S>         RNG seed (default: 42)\n\
           --config <path>    Engine configuration JSON (optional)\n\
         \n\
         sample    Run the reference encounter and pretty-print the result\n\
         \n\
         Set RUST_LOG=debug for per-stage tracing.\n"
    );
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn build_engine(args: &[String]) -> AvoidanceEngine {
    let config = match parse_flag(args, "--config").map(PathBuf::from) {
        Some(path) => {
            let text = match fs::read_to_string(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error reading config {}: {e}", path.display());
                    process::exit(1);
                }
            };
            match EngineConfig::from_json_str(&text) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error in config {}: {e}", path.display());
                    process::exit(1);
                }
            }
        }
        None => EngineConfig::default(),
    };

    match AvoidanceEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            process::exit(1);
        }
    }
}

// --- Replay command ---

fn cmd_replay(args: &[String]) {
    let input = match parse_flag(args, "--input") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --input <path> is required");
            process::exit(1);
        }
    };
    let engine = build_engine(args);

    let file = match fs::File::open(&input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening {}: {e}", input.display());
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading {}: {e}", input.display());
                process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let frame: UpdateFrame = match serde_json::from_str(&line) {
            Ok(f) => f,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "malformed frame skipped");
                rejected += 1;
                continue;
            }
        };

        match engine.process_update(&frame) {
            Ok(result) => {
                let written = serde_json::to_string(&result)
                    .map_err(io::Error::from)
                    .and_then(|json| writeln!(out, "{json}"));
                if let Err(e) = written {
                    eprintln!("Error writing result: {e}");
                    process::exit(1);
                }
                accepted += 1;
            }
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "frame rejected");
                rejected += 1;
            }
        }
    }

    info!(accepted, rejected, "replay finished");
}

// --- Synthetic command ---

fn cmd_synthetic(args: &[String]) {
    let count: usize = parse_number(args, "--count", 1000);
    let seed: u64 = parse_number(args, "--seed", 42);
    let engine = build_engine(args);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let frames: Vec<UpdateFrame> = (0..count)
        .map(|i| random_frame(&mut rng, i as f64))
        .collect();

    info!(count, seed, "processing synthetic encounters");
    let results = engine.process_batch(&frames);

    let levels = [
        RiskLevel::None,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];
    let mut by_level = serde_json::Map::new();
    for level in levels {
        let n = results
            .iter()
            .filter(|r| matches!(r, Ok(res) if res.risk_assessment.level == level))
            .count();
        by_level.insert(level.as_str().to_string(), n.into());
    }
    let rejected = results.iter().filter(|r| r.is_err()).count();
    let alerts: usize = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|r| r.alerts.len())
        .sum();

    let summary = serde_json::json!({
        "count": count,
        "seed": seed,
        "levels": by_level,
        "rejected": rejected,
        "alerts": alerts,
    });
    println!("{summary}");
}

fn random_frame(rng: &mut ChaCha8Rng, timestamp: f64) -> UpdateFrame {
    let altitude = rng.gen_range(2_000.0..40_000.0);
    let ownship = TrackReport {
        identifier: Some("OWNSHIP".to_string()),
        position: Some(Vector3::new(0.0, 0.0, altitude)),
        speed: Some(rng.gen_range(100.0..500.0)),
        heading: Some(rng.gen_range(0.0..360.0)),
        ..Default::default()
    };
    let intruder = TrackReport {
        position: Some(Vector3::new(
            rng.gen_range(-10_000.0..10_000.0),
            rng.gen_range(-10_000.0..10_000.0),
            altitude + rng.gen_range(-1_000.0..1_000.0),
        )),
        speed: Some(rng.gen_range(100.0..500.0)),
        heading: Some(rng.gen_range(0.0..360.0)),
        vertical_rate: Some(rng.gen_range(-20.0..20.0)),
        ..Default::default()
    };

    let weather = rng.gen_bool(0.5).then(|| WeatherInput {
        visibility: rng.gen_range(500.0..12_000.0),
        precipitation_rate: rng.gen_range(0.0..12.0),
        wind_speed: rng.gen_range(0.0..60.0),
        wind_direction: rng.gen_range(0.0..360.0),
        turbulence_index: rng.gen(),
        icing_potential: rng.gen(),
        lightning_activity: rng.gen(),
        ..Default::default()
    });
    let terrain = rng.gen_bool(0.3).then(|| {
        let elevation = rng.gen_range(0.0..altitude * 0.9);
        TerrainInput {
            aircraft_altitude: altitude,
            terrain_elevation: elevation,
            terrain_slope: rng.gen_range(0.0..50.0),
            terrain_roughness: rng.gen(),
            terrain_clearance: altitude - elevation,
            ..Default::default()
        }
    });

    UpdateFrame {
        ownship,
        intruder,
        weather,
        terrain,
        timestamp,
        ..Default::default()
    }
}

// --- Sample command ---

fn cmd_sample(args: &[String]) {
    let engine = build_engine(args);
    let frame = sample_frame();

    let result = match engine.process_update(&frame) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: sample frame rejected: {e}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serialising result: {e}");
            process::exit(1);
        }
    }
}

/// Distant descending intruder in moderate weather over mountainous terrain.
fn sample_frame() -> UpdateFrame {
    UpdateFrame {
        ownship: TrackReport {
            identifier: Some("OWNSHIP".to_string()),
            ..TrackReport::local(Vector3::new(0.0, 0.0, 10_000.0), Vector3::ZERO)
        },
        intruder: TrackReport {
            identifier: Some("INTRUDER".to_string()),
            ..TrackReport::local(
                Vector3::new(5_000.0, 5_000.0, 9_500.0),
                Vector3::new(-220.0, 0.0, -100.0),
            )
        },
        weather: Some(WeatherInput {
            visibility: 5_000.0,
            precipitation_rate: 2.5,
            cloud_ceiling: 8_000.0,
            wind_speed: 25.0,
            wind_direction: 45.0,
            turbulence_index: 0.7,
            icing_potential: 0.6,
            lightning_activity: 0.8,
        }),
        terrain: Some(TerrainInput {
            aircraft_altitude: 10_000.0,
            terrain_elevation: 8_000.0,
            terrain_slope: 15.0,
            distance_to_terrain: 2_000.0,
            terrain_type: "mountainous".to_string(),
            terrain_roughness: 0.8,
            terrain_obstacles: vec![
                Obstacle {
                    kind: "peak".to_string(),
                    elevation: 8_500.0,
                    distance: 5_000.0,
                    height: None,
                },
                Obstacle {
                    kind: "ridge".to_string(),
                    elevation: 8_200.0,
                    distance: 3_000.0,
                    height: None,
                },
            ],
            terrain_clearance: 2_000.0,
        }),
        timestamp: 0.0,
        ..Default::default()
    }
}
