//! Extracting benchmark runs from log text
//!
//! A run starts at a `Begin <circuit> with config <config>` line. Metric lines
//! are only looked at while a run is open. The proving time closes batch
//! verifier and keccak runs; outer circuit runs stay open until the gas cost
//! has been logged. A new `Begin` line discards a run that never closed.

use crate::error::BenchLogError;
use crate::record::{Circuit, Metric, RawRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

static RUN_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Begin (UBV|Keccak|UniversalOuter) with config (.*)$").unwrap());

static METRIC_PATTERNS: Lazy<Vec<(Metric, Regex)>> = Lazy::new(|| {
    [
        (Metric::AdviceCells, r"(\d+) advice cells"),
        (Metric::LookupCells, r"(\d+) lookup advice cells"),
        (Metric::AdviceColumns, r"num_advice_per_phase: \[(\d+)"),
        (Metric::LookupAdviceColumns, r"num_lookup_advice_per_phase: \[(\d+)"),
        (Metric::FixedColumns, r"num_fixed: (\d+)"),
        (Metric::ProvingTime, r"Time: ([\d.]+)s"),
        (Metric::GasCost, r"Gas cost per proof: (\d+)"),
    ]
    .into_iter()
    .map(|(metric, pattern)| (metric, Regex::new(pattern).unwrap()))
    .collect()
});

static KECCAK_BATCH_SIZES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"inner_batch_size: (\d+), outer_batch_size: (\d+)").unwrap());

/// Parse every closed benchmark run in `text`.
pub fn parse_log(text: &str) -> Result<Vec<RawRecord>, BenchLogError> {
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(caps) = RUN_START.captures(line) {
            let Some(circuit) = Circuit::from_name(&caps[1]) else {
                continue;
            };
            if let Some(dropped) = current.take() {
                debug!(circuit = %dropped.circuit, "run never closed, dropping it");
            }
            let configuration = match circuit {
                Circuit::Keccak => with_total_batch_size(&caps[2])?,
                _ => caps[2].to_string(),
            };
            current = Some(RawRecord::new(circuit, configuration));
        }

        let Some(record) = current.as_mut() else {
            continue;
        };

        let mut closed = false;
        for (metric, pattern) in METRIC_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                record.metrics.set(*metric, caps[1].to_string());
                closed |= *metric == record.circuit.closing_metric();
            }
        }

        if closed {
            records.extend(current.take());
        }
    }

    Ok(records)
}

/// Read and parse the log file at `path`.
pub fn parse_log_file(path: &Path) -> Result<Vec<RawRecord>, BenchLogError> {
    info!(path = %path.display(), "parsing benchmark log");
    let text = fs::read_to_string(path).map_err(|source| BenchLogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_log(&text)?;
    info!(runs = records.len(), "parsed benchmark runs");
    Ok(records)
}

/// Keccak throughput depends on the total batch size only, so the inner and
/// outer batch sizes are folded into `total_batch_size`.
fn with_total_batch_size(configuration: &str) -> Result<String, BenchLogError> {
    let Some(caps) = KECCAK_BATCH_SIZES.captures(configuration) else {
        return Ok(configuration.to_string());
    };
    let inner = parse_u64("inner_batch_size", &caps[1])?;
    let outer = parse_u64("outer_batch_size", &caps[2])?;
    let total = format!("total_batch_size: {}", total_batch_size(inner, outer)?);
    Ok(KECCAK_BATCH_SIZES
        .replace_all(configuration, total.as_str())
        .into_owned())
}

/// `inner * outer`, rejecting products that do not fit in a `u64`.
pub(crate) fn total_batch_size(inner: u64, outer: u64) -> Result<u64, BenchLogError> {
    inner
        .checked_mul(outer)
        .ok_or_else(|| BenchLogError::InvalidNumber {
            field: "total_batch_size",
            value: format!("{inner}*{outer}"),
        })
}

pub(crate) fn parse_u64(field: &'static str, value: &str) -> Result<u64, BenchLogError> {
    value.parse().map_err(|_| BenchLogError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
