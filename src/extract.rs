//! Metric extraction from raw result-file text.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

/// One measured metric block within a result file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub packet_loss: f64,
    pub avg_delay: f64,
    pub control_overhead: f64,
}

// The three labels must appear in this order; the lazy wildcards tolerate
// arbitrary text (including newlines) between them without swallowing a
// following block.
const METRIC_PATTERN: &str =
    r"(?s)PacketLossRatio:\s([\d.]+)%.*?AvgDelay:\s([\d.]+)\s.*?ControlOverhead:\s([\d.]+)%";

fn metric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(METRIC_PATTERN).unwrap())
}

/// Pull every metric block out of `content`, in order of appearance. A file
/// with no match yields an empty vec; that is not an error.
pub fn extract_metrics(content: &str) -> Result<Vec<Metrics>> {
    metric_regex()
        .captures_iter(content)
        .map(|caps| {
            Ok(Metrics {
                packet_loss: parse_value(&caps[1], "PacketLossRatio")?,
                avg_delay: parse_value(&caps[2], "AvgDelay")?,
                control_overhead: parse_value(&caps[3], "ControlOverhead")?,
            })
        })
        .collect()
}

fn parse_value(text: &str, label: &str) -> Result<f64> {
    text.parse()
        .with_context(|| format!("invalid {} value '{}'", label, text))
}
