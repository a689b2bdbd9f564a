//! Joining outer circuit runs with the runs of their component circuits
//!
//! An outer circuit config embeds the configs of the batch verifier and keccak
//! circuits it aggregates. Those are rebuilt in the exact form the component
//! benchmarks log them, which is the key used to look up their averaged
//! metrics.

use crate::aggregate::{metric_cell, AveragedRecord};
use crate::error::BenchLogError;
use crate::parser::{parse_u64, total_batch_size};
use crate::record::{Circuit, Metric};
use crate::table::Table;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

macro_rules! field_regex {
    ($pattern:expr) => {
        Lazy::new(|| Regex::new($pattern).unwrap())
    };
}

static INNER_BATCH_SIZE: Lazy<Regex> = field_regex!(r"inner_batch_size: (\d+)");
static OUTER_BATCH_SIZE: Lazy<Regex> = field_regex!(r"outer_batch_size: (\d+)");
static MAX_PUBLIC_INPUTS: Lazy<Regex> = field_regex!(r"max_num_app_public_inputs: (\d+)");
static OUTER_DEGREE_BITS: Lazy<Regex> = field_regex!(r"outer_config:.*?degree_bits: (\d+)");
static UBV_DEGREE_BITS: Lazy<Regex> = field_regex!(r"bv_config:.*?degree_bits: (\d+)");
static KECCAK_DEGREE_BITS: Lazy<Regex> = field_regex!(r"keccak_config:.*?degree_bits: (\d+)");

static BV_CONFIG: Lazy<Regex> = field_regex!(r"bv_config: CircuitWithLimbsConfig \{ ([^}]+) \}");
static KECCAK_CONFIG: Lazy<Regex> = field_regex!(r"keccak_config: CircuitConfig \{ ([^}]+) \}");
static KECCAK_BITS: Lazy<Regex> = field_regex!(r"degree_bits: (\d+), lookup_bits: (\d+)");
static DEGREE_BITS: Lazy<Regex> = field_regex!(r"degree_bits: (\d+)");
static LOOKUP_BITS: Lazy<Regex> = field_regex!(r"lookup_bits: (\d+)");
static LIMB_BITS: Lazy<Regex> = field_regex!(r"limb_bits: (\d+)");
static NUM_LIMBS: Lazy<Regex> = field_regex!(r"num_limbs: (\d+)");

/// Metrics reported per component, in processed column order
const COMPONENT_METRICS: [Metric; 5] = [
    Metric::AdviceCells,
    Metric::AdviceColumns,
    Metric::LookupCells,
    Metric::LookupAdviceColumns,
    Metric::FixedColumns,
];

fn capture<'a>(
    re: &Regex,
    text: &'a str,
    field: &'static str,
    configuration: &str,
) -> Result<&'a str, BenchLogError> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| BenchLogError::MissingField {
            field,
            configuration: configuration.to_string(),
        })
}

fn capture_u64(re: &Regex, configuration: &str, field: &'static str) -> Result<u64, BenchLogError> {
    parse_u64(field, capture(re, configuration, field, configuration)?)
}

/// The sort and grouping keys of an outer circuit config
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OuterConfig {
    pub max_num_public_inputs: u64,
    pub total_batch_size: u64,
    pub outer_batch_size: u64,
    pub inner_batch_size: u64,
    pub outer_degree_bits: u64,
    pub ubv_degree_bits: u64,
    pub keccak_degree_bits: u64,
}

impl OuterConfig {
    pub fn parse(configuration: &str) -> Result<Self, BenchLogError> {
        let inner_batch_size = capture_u64(&INNER_BATCH_SIZE, configuration, "inner_batch_size")?;
        let outer_batch_size = capture_u64(&OUTER_BATCH_SIZE, configuration, "outer_batch_size")?;
        Ok(Self {
            max_num_public_inputs: capture_u64(
                &MAX_PUBLIC_INPUTS,
                configuration,
                "max_num_app_public_inputs",
            )?,
            total_batch_size: total_batch_size(inner_batch_size, outer_batch_size)?,
            outer_batch_size,
            inner_batch_size,
            outer_degree_bits: capture_u64(
                &OUTER_DEGREE_BITS,
                configuration,
                "outer_config.degree_bits",
            )?,
            ubv_degree_bits: capture_u64(&UBV_DEGREE_BITS, configuration, "bv_config.degree_bits")?,
            keccak_degree_bits: capture_u64(
                &KECCAK_DEGREE_BITS,
                configuration,
                "keccak_config.degree_bits",
            )?,
        })
    }
}

/// Rebuild the batch verifier and keccak configs embedded in an outer config.
pub fn component_configs(configuration: &str) -> Result<(String, String), BenchLogError> {
    let max_inputs = capture(
        &MAX_PUBLIC_INPUTS,
        configuration,
        "max_num_app_public_inputs",
        configuration,
    )?;
    let inner_batch_size = capture_u64(&INNER_BATCH_SIZE, configuration, "inner_batch_size")?;
    let outer_batch_size = capture_u64(&OUTER_BATCH_SIZE, configuration, "outer_batch_size")?;
    let total = total_batch_size(inner_batch_size, outer_batch_size)?;

    let bv = capture(&BV_CONFIG, configuration, "bv_config", configuration)?;
    let ubv = format!(
        "UniversalBatchVerifierConfig {{ degree_bits: {}, lookup_bits: {}, limb_bits: {}, num_limbs: {}, inner_batch_size: {}, max_num_public_inputs: {} }}",
        capture(&DEGREE_BITS, bv, "bv_config.degree_bits", configuration)?,
        capture(&LOOKUP_BITS, bv, "bv_config.lookup_bits", configuration)?,
        capture(&LIMB_BITS, bv, "bv_config.limb_bits", configuration)?,
        capture(&NUM_LIMBS, bv, "bv_config.num_limbs", configuration)?,
        inner_batch_size,
        max_inputs,
    );

    let keccak = capture(&KECCAK_CONFIG, configuration, "keccak_config", configuration)?;
    let bits = KECCAK_BITS
        .captures(keccak)
        .ok_or_else(|| BenchLogError::MissingField {
            field: "keccak_config.lookup_bits",
            configuration: configuration.to_string(),
        })?;
    let keccak = format!(
        "KeccakConfig {{ degree_bits: {}, num_app_public_inputs: {}, total_batch_size: {}, lookup_bits: {} }}",
        &bits[1],
        max_inputs,
        total,
        &bits[2],
    );

    Ok((ubv, keccak))
}

/// One processed row: an outer circuit run and its components' metrics
#[derive(Debug, Clone, PartialEq)]
pub struct OuterRow {
    pub config: OuterConfig,
    pub configuration: String,
    pub gas_cost: String,
    pub outer_proving_time: String,
    pub ubv_proving_time: String,
    pub keccak_proving_time: String,
    pub ubv_metrics: Vec<String>,
    pub keccak_metrics: Vec<String>,
    pub outer_metrics: Vec<String>,
}

/// `NA` when the component never ran, empty when it ran without this metric
fn component_cell(record: Option<&AveragedRecord>, metric: Metric) -> String {
    match record {
        Some(record) => metric_cell(&record.metrics, metric),
        None => "NA".to_string(),
    }
}

/// Build a processed row for every outer circuit record.
pub fn compile_outer_rows(records: &[AveragedRecord]) -> Result<Vec<OuterRow>, BenchLogError> {
    let mut ubv: HashMap<&str, &AveragedRecord> = HashMap::new();
    let mut keccak: HashMap<&str, &AveragedRecord> = HashMap::new();
    let mut outer = Vec::new();

    // Later duplicates win.
    for record in records {
        match record.circuit {
            Circuit::Ubv => {
                ubv.insert(record.configuration.as_str(), record);
            }
            Circuit::Keccak => {
                keccak.insert(record.configuration.as_str(), record);
            }
            Circuit::UniversalOuter => outer.push(record),
        }
    }

    outer
        .into_iter()
        .map(|record| -> Result<OuterRow, BenchLogError> {
            let config = OuterConfig::parse(&record.configuration)?;
            let (ubv_key, keccak_key) = component_configs(&record.configuration)?;
            let ubv_record = ubv.get(ubv_key.as_str()).copied();
            let keccak_record = keccak.get(keccak_key.as_str()).copied();

            Ok(OuterRow {
                config,
                configuration: record.configuration.clone(),
                gas_cost: metric_cell(&record.metrics, Metric::GasCost),
                outer_proving_time: metric_cell(&record.metrics, Metric::ProvingTime),
                ubv_proving_time: component_cell(ubv_record, Metric::ProvingTime),
                keccak_proving_time: component_cell(keccak_record, Metric::ProvingTime),
                ubv_metrics: COMPONENT_METRICS
                    .iter()
                    .map(|metric| component_cell(ubv_record, *metric))
                    .collect(),
                keccak_metrics: COMPONENT_METRICS
                    .iter()
                    .map(|metric| component_cell(keccak_record, *metric))
                    .collect(),
                outer_metrics: COMPONENT_METRICS
                    .iter()
                    .map(|metric| metric_cell(&record.metrics, *metric))
                    .collect(),
            })
        })
        .collect()
}

/// Sort by public inputs, batch sizes and then degree bits; ties keep
/// their order.
pub fn sort_outer_rows(rows: &mut [OuterRow]) {
    rows.sort_by_key(|row| row.config);
}

pub fn processed_table(rows: &[OuterRow]) -> Table {
    let mut header: Vec<String> = [
        "circuit_name",
        "inner_batch_size",
        "outer_batch_size",
        "total_batch_size",
        "max_num_public_inputs",
        "outer_degree_bits",
        "ubv_degree_bits",
        "keccak_degree_bits",
        "gas_cost",
        "outer_proving_time",
        "ubv_proving_time",
        "keccak_proving_time",
    ]
    .iter()
    .map(|column| column.to_string())
    .collect();
    for prefix in ["ubv", "keccak", "outer"] {
        header.extend(
            COMPONENT_METRICS
                .iter()
                .map(|metric| format!("{}_{}", prefix, metric.column())),
        );
    }
    header.push("configuration".to_string());

    let mut table = Table::new(header);
    for row in rows {
        let config = &row.config;
        let mut cells = vec![
            Circuit::UniversalOuter.name().to_string(),
            config.inner_batch_size.to_string(),
            config.outer_batch_size.to_string(),
            config.total_batch_size.to_string(),
            config.max_num_public_inputs.to_string(),
            config.outer_degree_bits.to_string(),
            config.ubv_degree_bits.to_string(),
            config.keccak_degree_bits.to_string(),
            row.gas_cost.clone(),
            row.outer_proving_time.clone(),
            row.ubv_proving_time.clone(),
            row.keccak_proving_time.clone(),
        ];
        cells.extend(row.ubv_metrics.iter().cloned());
        cells.extend(row.keccak_metrics.iter().cloned());
        cells.extend(row.outer_metrics.iter().cloned());
        cells.push(row.configuration.clone());
        table.push_row(cells);
    }
    table
}
