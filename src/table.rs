//! Tabular data model for parsed simulation results.

use std::fmt;

/// Routing algorithms compared by the experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Aodv,
    Olsr,
    Dsdv,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Aodv, Algorithm::Olsr, Algorithm::Dsdv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Aodv => "AODV",
            Algorithm::Olsr => "OLSR",
            Algorithm::Dsdv => "DSDV",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent experimental variables used to group results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    Mobility,
    NodeCount,
    Speed,
}

impl Factor {
    pub const ALL: [Factor; 3] = [Factor::Mobility, Factor::NodeCount, Factor::Speed];

    /// Key used in chart file names.
    pub fn key(&self) -> &'static str {
        match self {
            Factor::Mobility => "mobilidade",
            Factor::NodeCount => "quantidade_nos",
            Factor::Speed => "velocidade",
        }
    }

    /// Human-readable name for titles and axis labels.
    pub fn title(&self) -> String {
        display_name(self.key())
    }
}

/// Measured outcomes extracted from each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PacketLoss,
    AvgDelay,
    ControlOverhead,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::PacketLoss, Metric::AvgDelay, Metric::ControlOverhead];

    /// Key used in chart file names.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::PacketLoss => "perda_pacotes",
            Metric::AvgDelay => "delay_medio",
            Metric::ControlOverhead => "control_overhead",
        }
    }

    /// Human-readable name for titles and axis labels.
    pub fn title(&self) -> String {
        display_name(self.key())
    }
}

/// One simulation run: the four categorical fields parsed from the filename
/// plus the three metrics extracted from the file content.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub algorithm: Algorithm,
    pub mobility: String,
    pub node_count: String,
    pub speed: String,
    pub packet_loss: f64,
    pub avg_delay: f64,
    pub control_overhead: f64,
}

impl ResultRecord {
    pub fn factor_level(&self, factor: Factor) -> &str {
        match factor {
            Factor::Mobility => &self.mobility,
            Factor::NodeCount => &self.node_count,
            Factor::Speed => &self.speed,
        }
    }

    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PacketLoss => self.packet_loss,
            Metric::AvgDelay => self.avg_delay,
            Metric::ControlOverhead => self.control_overhead,
        }
    }
}

/// All records of a batch run, in discovery order. Duplicate configurations
/// are valid; they represent repeated trials.
#[derive(Debug, Default)]
pub struct ResultTable {
    records: Vec<ResultRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn for_algorithm(&self, algorithm: Algorithm) -> Vec<&ResultRecord> {
        self.records
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .collect()
    }
}

/// Sorted unique levels of `factor` within `records`. Levels are string
/// labels, so the order is lexical.
pub fn sorted_levels(records: &[&ResultRecord], factor: Factor) -> Vec<String> {
    let mut levels: Vec<String> = records
        .iter()
        .map(|r| r.factor_level(factor).to_string())
        .collect();
    levels.sort();
    levels.dedup();
    levels
}

/// Records whose `factor` level equals `level`.
pub fn with_level<'a>(
    records: &[&'a ResultRecord],
    factor: Factor,
    level: &str,
) -> Vec<&'a ResultRecord> {
    records
        .iter()
        .filter(|r| r.factor_level(factor) == level)
        .copied()
        .collect()
}

/// Column of `metric` values for a subset of records.
pub fn metric_values(records: &[&ResultRecord], metric: Metric) -> Vec<f64> {
    records.iter().map(|r| r.metric_value(metric)).collect()
}

/// Turn a snake_case key into a Title Case label: `quantidade_nos` ->
/// `Quantidade Nos`.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
