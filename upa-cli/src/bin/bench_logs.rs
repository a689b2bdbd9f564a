//! Turn a benchmark log into raw, combined and processed CSV tables.
//!
//! Usage:
//!   bench-logs `<log-file>` `<output-prefix>` [--config `<file>`] [-v]

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use upa_benchlog::run_pipeline;
use upa_cli::{load_config_or_exit, logging};

fn main() {
    let matches = Command::new("bench-logs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Process benchmark logs into CSV tables")
        .arg(
            Arg::new("log-file")
                .help("Benchmark log to parse")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-prefix")
                .help("Path prefix for the generated CSV files")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parsing progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config_or_exit(matches.get_one::<String>("config").map(String::as_str), Ok);
    logging::init(config.logging.level, matches.get_flag("verbose"));

    let log_file = matches.get_one::<String>("log-file").unwrap();
    let output_prefix = matches.get_one::<String>("output-prefix").unwrap();

    let summary = run_pipeline(
        Path::new(log_file),
        Path::new(output_prefix),
        &config.bench.suffixes(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!(
        "Parsed {} runs ({} configurations, {} outer rows)",
        summary.runs, summary.configs, summary.outer_rows
    );
    for path in [
        &summary.raw_path,
        &summary.combined_path,
        &summary.processed_path,
    ] {
        println!("  wrote {}", path.display());
    }
}
