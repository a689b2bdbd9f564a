//! Averaging repeated runs of the same benchmark

use crate::error::BenchLogError;
use crate::record::{Circuit, Metric, Metrics, RawRecord};
use crate::table::Table;
use std::collections::HashMap;

/// Mean of all runs sharing a circuit and config
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedRecord {
    pub circuit: Circuit,
    pub configuration: String,
    pub metrics: Metrics<f64>,
    pub sample_size: usize,
}

/// Group runs by (circuit, config) in first-seen order and average every
/// metric over the runs that reported it.
pub fn average_duplicates(records: &[RawRecord]) -> Result<Vec<AveragedRecord>, BenchLogError> {
    let mut index: HashMap<(Circuit, &str), usize> = HashMap::new();
    let mut groups: Vec<Vec<&RawRecord>> = Vec::new();

    for record in records {
        let key = (record.circuit, record.configuration.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    groups.into_iter().map(|group| average_group(&group)).collect()
}

fn average_group(group: &[&RawRecord]) -> Result<AveragedRecord, BenchLogError> {
    let first = group[0];
    let mut metrics = Metrics::default();

    for metric in Metric::ALL {
        let mut sum = 0.0;
        let mut count = 0usize;
        for record in group {
            let Some(raw) = record.metrics.get(metric) else {
                continue;
            };
            if raw.is_empty() || raw == "NA" {
                continue;
            }
            sum += raw.parse::<f64>().map_err(|_| BenchLogError::InvalidNumber {
                field: metric.column(),
                value: raw.clone(),
            })?;
            count += 1;
        }
        if count > 0 {
            metrics.set(metric, sum / count as f64);
        }
    }

    Ok(AveragedRecord {
        circuit: first.circuit,
        configuration: first.configuration.clone(),
        metrics,
        sample_size: group.len(),
    })
}

/// Averages always print as floats; whole numbers keep their `.0`.
pub(crate) fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

pub(crate) fn metric_cell(metrics: &Metrics<f64>, metric: Metric) -> String {
    metrics.get(metric).map(|value| format_value(*value)).unwrap_or_default()
}

pub fn combined_table(records: &[AveragedRecord]) -> Table {
    let mut table = Table::new(
        ["circuit_name", "configuration"]
            .into_iter()
            .chain(Metric::ALL.iter().map(|metric| metric.column()))
            .chain(["sample_size"]),
    );
    for record in records {
        let mut row = vec![record.circuit.name().to_string(), record.configuration.clone()];
        row.extend(Metric::ALL.iter().map(|metric| metric_cell(&record.metrics, *metric)));
        row.push(record.sample_size.to_string());
        table.push_row(row);
    }
    table
}
