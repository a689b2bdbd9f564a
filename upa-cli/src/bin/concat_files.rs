//! Concatenate files in the order given.
//!
//! Usage:
//!   concat-files `<output>` `<input>`...

use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use upa_benchlog::concat_files;
use upa_cli::{load_config_or_exit, logging};

fn main() {
    let matches = Command::new("concat-files")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Concatenate multiple files into a single output file")
        .arg(
            Arg::new("output")
                .help("File to write")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("inputs")
                .help("Files to concatenate, in order")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config_or_exit(None, Ok);
    logging::init(config.logging.level, matches.get_flag("verbose"));

    let output = matches.get_one::<String>("output").unwrap();
    let inputs: Vec<PathBuf> = matches
        .get_many::<String>("inputs")
        .unwrap_or_default()
        .map(PathBuf::from)
        .collect();

    if let Err(e) = concat_files(Path::new(output), &inputs) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!("Concatenated contents written to {}", output);
}
