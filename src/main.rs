//! manetperf - batch analyzer for MANET routing simulation results.
//!
//! One-shot pipeline: result files -> per-run metric records -> grouped
//! means with confidence intervals -> comparison charts plus a summary
//! table on stdout.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use cli_table::format::{Border, Separator};
use cli_table::Table;
use manetperf::stats;
use manetperf::table::{self, Algorithm, Metric, ResultTable};
use std::path::PathBuf;

/// Analyze MANET routing simulation results and render comparison charts
#[derive(Parser, Debug)]
#[command(name = "manetperf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the simulation result files
    #[arg(short, long, default_value = "resultados")]
    input: PathBuf,

    /// Output directory for the generated charts
    #[arg(short, long, default_value = "graficos")]
    output: PathBuf,

    /// Two-sided confidence level for the intervals
    #[arg(short, long, default_value = "0.90")]
    confidence: f64,

    /// Skip the per-algorithm summary table on stdout
    #[arg(long)]
    no_summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        args.confidence > 0.0 && args.confidence < 1.0,
        "confidence must be strictly between 0 and 1"
    );

    eprintln!("Reading results from: {}", args.input.display());
    let table = manetperf::collect_records(&args.input)?;
    ensure!(
        !table.is_empty(),
        "no metric records found in {}",
        args.input.display()
    );
    eprintln!("Parsed {} result records", table.len());

    let generated = manetperf::chart::render_all(&table, &args.output, args.confidence)?;
    eprintln!(
        "Generated {} charts in {}",
        generated.len(),
        args.output.display()
    );

    if !args.no_summary {
        print_summary(&table, args.confidence)?;
    }

    Ok(())
}

/// One summary row per algorithm present in the data: the algorithm name
/// followed by `mean (low, high)` for each metric.
fn summary_rows(table: &ResultTable, confidence: f64) -> Result<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for algorithm in Algorithm::ALL {
        let subset = table.for_algorithm(algorithm);
        if subset.is_empty() {
            continue;
        }
        let mut row = vec![algorithm.to_string()];
        for metric in Metric::ALL {
            let values = table::metric_values(&subset, metric);
            let stat = stats::confidence_interval(&values, confidence)
                .with_context(|| format!("aggregating {} / {}", algorithm, metric.key()))?;
            row.push(format!(
                "{:.2} ({:.2}, {:.2})",
                stat.mean, stat.ci_low, stat.ci_high
            ));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn print_summary(table: &ResultTable, confidence: f64) -> Result<()> {
    let rows = summary_rows(table, confidence)?;

    let mut title = vec!["Algoritmo".to_string()];
    title.extend(Metric::ALL.iter().map(|m| m.title()));

    println!(
        "{}",
        rows.table()
            .title(title)
            .border(Border::builder().build())
            .separator(Separator::builder().build())
            .display()
            .context("Failed to render summary table")?
    );
    Ok(())
}
