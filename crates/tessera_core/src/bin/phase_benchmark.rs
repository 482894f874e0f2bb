//! # Phase Benchmark
//!
//! Command-line driver for [`tessera_core::bench::run_phases`].
//!
//! Usage: `phase_benchmark [entity_count] [--config path]`

use tessera_core::bench::run_phases;
use tessera_core::RegistryConfig;

/// Entities per phase when no count is given.
const DEFAULT_ENTITY_COUNT: u32 = 1_000_000;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("Usage: phase_benchmark [entity_count] [--config path]");
        println!();
        println!("Options:");
        println!("  --config <path>  Registry limits as TOML");
        return;
    }

    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1));

    let config = match config_path {
        Some(path) => match RegistryConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                println!("Error: could not load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => RegistryConfig::default(),
    };

    let entity_count = match args.first().filter(|arg| !arg.starts_with("--")) {
        Some(raw) => match raw.parse() {
            Ok(count) => count,
            Err(e) => {
                println!("Error: invalid entity count {raw:?}: {e}");
                std::process::exit(1);
            }
        },
        None => DEFAULT_ENTITY_COUNT,
    };

    match run_phases(config, entity_count) {
        Ok(report) => {
            println!("{report}");
            println!("  (checksum {:.1})", report.checksum);
        }
        Err(e) => {
            println!("Error: benchmark failed: {e}");
            std::process::exit(1);
        }
    }
}
