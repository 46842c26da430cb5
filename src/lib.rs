//! Batch analysis of MANET routing simulation results.
//!
//! Scans a directory of ns-3 result files named
//! `<N>nodes_<mobility>_<S>mps_<ALGO>.txt`, extracts packet loss, average
//! delay and control overhead per run, aggregates each group with Student-t
//! confidence intervals and renders comparison charts.

pub mod chart;
pub mod extract;
pub mod scan;
pub mod stats;
pub mod table;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use table::{ResultRecord, ResultTable};

/// Scan `input` and build the full result table, one record per metric
/// block found in each file. Files without any metric block contribute
/// nothing; a malformed filename or unreadable file aborts the run.
pub fn collect_records(input: &Path) -> Result<ResultTable> {
    let mut table = ResultTable::new();
    for (run, path) in scan::scan_dir(input)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let blocks = extract::extract_metrics(&content)
            .with_context(|| format!("Failed to parse metrics in {}", path.display()))?;
        for metrics in blocks {
            table.push(ResultRecord {
                algorithm: run.algorithm,
                mobility: run.mobility.clone(),
                node_count: run.node_count.clone(),
                speed: run.speed.clone(),
                packet_loss: metrics.packet_loss,
                avg_delay: metrics.avg_delay,
                control_overhead: metrics.control_overhead,
            });
        }
    }
    Ok(table)
}
