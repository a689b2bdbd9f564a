//! Log file to CSV tables, end to end

use crate::aggregate::{average_duplicates, combined_table};
use crate::error::BenchLogError;
use crate::outer::{compile_outer_rows, processed_table, sort_outer_rows};
use crate::parser::parse_log_file;
use crate::record::raw_table;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffixes appended to the output prefix for each table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSuffixes {
    pub raw: String,
    pub combined: String,
    pub processed: String,
}

impl Default for OutputSuffixes {
    fn default() -> Self {
        Self {
            raw: "_raw.csv".to_string(),
            combined: "_combined.csv".to_string(),
            processed: "_processed.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub raw_path: PathBuf,
    pub combined_path: PathBuf,
    pub processed_path: PathBuf,
    pub runs: usize,
    pub configs: usize,
    pub outer_rows: usize,
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Parse `input` and write the raw, combined and processed tables next to
/// `output_prefix`.
pub fn run_pipeline(
    input: &Path,
    output_prefix: &Path,
    suffixes: &OutputSuffixes,
) -> Result<PipelineSummary, BenchLogError> {
    let records = parse_log_file(input)?;
    let raw_path = with_suffix(output_prefix, &suffixes.raw);
    raw_table(&records).write(&raw_path)?;

    let averaged = average_duplicates(&records)?;
    let combined_path = with_suffix(output_prefix, &suffixes.combined);
    combined_table(&averaged).write(&combined_path)?;

    let mut rows = compile_outer_rows(&averaged)?;
    sort_outer_rows(&mut rows);
    let processed_path = with_suffix(output_prefix, &suffixes.processed);
    processed_table(&rows).write(&processed_path)?;

    Ok(PipelineSummary {
        raw_path,
        combined_path,
        processed_path,
        runs: records.len(),
        configs: averaged.len(),
        outer_rows: rows.len(),
    })
}
