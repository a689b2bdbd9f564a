//! # upa-benchlog
//!
//! Turns the text logs of the circuit benchmarks into CSV tables.
//!
//! The benchmarks print a `Begin <circuit> with config <config>` line, then
//! whatever the prover logs while building and proving, and finish with the
//! proving time (or, for the universal outer circuit, the gas cost per proof).
//! From these logs the pipeline produces
//!
//!   raw        one row per benchmark run
//!   combined   runs with identical circuit and config averaged together
//!   processed  one row per outer circuit config, joined with the metrics of
//!              the batch verifier and keccak circuits it aggregates
//!
//! [`concat_files`] merges several log files before they are parsed.

pub mod aggregate;
pub mod concat;
pub mod error;
pub mod outer;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod table;

pub use aggregate::{average_duplicates, AveragedRecord};
pub use concat::concat_files;
pub use error::BenchLogError;
pub use outer::{compile_outer_rows, sort_outer_rows, OuterConfig, OuterRow};
pub use parser::{parse_log, parse_log_file};
pub use pipeline::{run_pipeline, OutputSuffixes, PipelineSummary};
pub use record::{Circuit, Metric, Metrics, RawRecord};
pub use table::Table;
