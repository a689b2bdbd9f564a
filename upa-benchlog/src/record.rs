//! Benchmark records as extracted from the logs

use crate::table::Table;
use std::fmt;

/// The benchmarked circuits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Circuit {
    /// Universal batch verifier
    Ubv,
    Keccak,
    UniversalOuter,
}

impl Circuit {
    pub const ALL: [Circuit; 3] = [Circuit::Ubv, Circuit::Keccak, Circuit::UniversalOuter];

    /// Name used in the logs and in the `circuit_name` column
    pub fn name(self) -> &'static str {
        match self {
            Circuit::Ubv => "UBV",
            Circuit::Keccak => "Keccak",
            Circuit::UniversalOuter => "UniversalOuter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|circuit| circuit.name() == name)
    }

    /// The metric whose log line ends this circuit's section
    pub fn closing_metric(self) -> Metric {
        match self {
            Circuit::UniversalOuter => Metric::GasCost,
            Circuit::Ubv | Circuit::Keccak => Metric::ProvingTime,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quantities extracted for every benchmark run, in raw column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    AdviceCells,
    LookupCells,
    AdviceColumns,
    LookupAdviceColumns,
    FixedColumns,
    ProvingTime,
    GasCost,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::AdviceCells,
        Metric::LookupCells,
        Metric::AdviceColumns,
        Metric::LookupAdviceColumns,
        Metric::FixedColumns,
        Metric::ProvingTime,
        Metric::GasCost,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Metric::AdviceCells => "num_advice_cells",
            Metric::LookupCells => "num_lookup_cells",
            Metric::AdviceColumns => "num_advice_columns",
            Metric::LookupAdviceColumns => "num_lookup_advice_columns",
            Metric::FixedColumns => "num_fixed_columns",
            Metric::ProvingTime => "proving_time",
            Metric::GasCost => "gas_cost",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One optional value per [`Metric`]
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics<T> {
    values: [Option<T>; 7],
}

impl<T> Metrics<T> {
    pub fn get(&self, metric: Metric) -> Option<&T> {
        self.values[metric.index()].as_ref()
    }

    pub fn set(&mut self, metric: Metric, value: T) {
        self.values[metric.index()] = Some(value);
    }
}

impl<T> Default for Metrics<T> {
    fn default() -> Self {
        Self {
            values: Default::default(),
        }
    }
}

/// A single benchmark run; values are kept exactly as logged
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub circuit: Circuit,
    pub configuration: String,
    pub metrics: Metrics<String>,
}

impl RawRecord {
    pub fn new(circuit: Circuit, configuration: impl Into<String>) -> Self {
        Self {
            circuit,
            configuration: configuration.into(),
            metrics: Metrics::default(),
        }
    }
}

/// Table with one row per run, missing values left empty
pub fn raw_table(records: &[RawRecord]) -> Table {
    let mut table = Table::new(
        ["circuit_name", "configuration"]
            .into_iter()
            .chain(Metric::ALL.iter().map(|metric| metric.column())),
    );
    for record in records {
        let mut row = vec![record.circuit.name().to_string(), record.configuration.clone()];
        row.extend(
            Metric::ALL
                .iter()
                .map(|metric| record.metrics.get(*metric).cloned().unwrap_or_default()),
        );
        table.push_row(row);
    }
    table
}
