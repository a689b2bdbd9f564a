//! Split a generated Yul verifier into its creation and runtime objects.
//!
//! Usage:
//!   split-yul `<input>` `<creation-output>` `<runtime-output>` [--strict] [--no-trailing-brace]
//!             [--format text|json] [--config `<file>`] [-v]

use clap::{Arg, ArgAction, ArgMatches, Command};
use upa_cli::{load_config_or_exit, logging};
use upa_yul::{split_yul_file, SplitError};

fn main() {
    let matches = Command::new("split-yul")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Separate Yul code into two files")
        .arg(
            Arg::new("input")
                .help("The input file containing Yul code.")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("creation-output")
                .help("The output file for the first code section.")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("runtime-output")
                .help("The output file for the second code section.")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 when the expected structure is not found")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-trailing-brace")
                .long("no-trailing-brace")
                .help("Do not append the extra closing brace to each output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Success output: a message or a JSON report")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log located offsets and written files to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config_or_exit(
        matches.get_one::<String>("config").map(String::as_str),
        |mut loader| {
            if matches.get_flag("strict") {
                loader = loader.set_override("split.strict", true)?;
            }
            if matches.get_flag("no-trailing-brace") {
                loader = loader.set_override("split.trailing_brace", false)?;
            }
            Ok(loader)
        },
    );
    logging::init(config.logging.level, matches.get_flag("verbose"));

    handle_split_command(&matches, &config.split.options(), config.split.strict);
}

fn handle_split_command(matches: &ArgMatches, options: &upa_yul::SplitOptions, strict: bool) {
    let input = matches.get_one::<String>("input").unwrap();
    let creation_output = matches.get_one::<String>("creation-output").unwrap();
    let runtime_output = matches.get_one::<String>("runtime-output").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    match split_yul_file(input, creation_output, runtime_output, options) {
        Ok(report) => {
            if format == "json" {
                let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                    eprintln!("Error formatting report: {}", e);
                    std::process::exit(1);
                });
                println!("{}", json);
            } else {
                println!(
                    "Code sections successfully written to {} and {}.",
                    creation_output, runtime_output
                );
            }
        }
        Err(SplitError::StructuralMismatch(mismatch)) => {
            println!("The Yul code structure does not match the expected pattern.");
            eprintln!("  {}", mismatch);
            if strict {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
