//! Chart generation for the aggregated results.
//!
//! Two chart families, both PNG: per-factor line charts with error bars
//! (one per algorithm x factor x metric) and global bar charts comparing
//! the three algorithms per metric.

use crate::stats::{confidence_interval, AggregateStat};
use crate::table::{self, Algorithm, Factor, Metric, ResultTable};
use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};

// matplotlib's default line color
const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);

// Fixed bar colors per algorithm position: tomato, steel blue, lime green.
const ALGO_COLORS: [RGBColor; 3] = [
    RGBColor(255, 99, 71),
    RGBColor(70, 130, 180),
    RGBColor(50, 205, 50),
];

/// Render every chart for `table` into `output_dir`, overwriting existing
/// files. Returns the written paths: one per (algorithm, factor, metric)
/// plus one global comparison per metric.
pub fn render_all(table: &ResultTable, output_dir: &Path, confidence: f64) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut generated = Vec::new();

    for algorithm in Algorithm::ALL {
        let subset = table.for_algorithm(algorithm);
        for factor in Factor::ALL {
            let levels = table::sorted_levels(&subset, factor);
            for metric in Metric::ALL {
                let mut level_stats = Vec::with_capacity(levels.len());
                for level in &levels {
                    let group = table::with_level(&subset, factor, level);
                    let values = table::metric_values(&group, metric);
                    let stat = confidence_interval(&values, confidence).with_context(|| {
                        format!(
                            "aggregating {} / {}={} / {}",
                            algorithm,
                            factor.key(),
                            level,
                            metric.key()
                        )
                    })?;
                    level_stats.push(stat);
                }

                let path =
                    output_dir.join(format!("{}_{}_{}.png", algorithm, factor.key(), metric.key()));
                line_chart(&path, algorithm, factor, metric, confidence, &levels, &level_stats)
                    .with_context(|| format!("Failed to render {}", path.display()))?;
                generated.push(path);
            }
        }
    }

    for metric in Metric::ALL {
        let mut algo_stats = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let subset = table.for_algorithm(algorithm);
            let values = table::metric_values(&subset, metric);
            let stat = confidence_interval(&values, confidence)
                .with_context(|| format!("aggregating {} / {}", algorithm, metric.key()))?;
            algo_stats.push(stat);
        }

        let path = output_dir.join(format!("comparacao_global_{}.png", metric.key()));
        global_bar_chart(&path, metric, &algo_stats)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        generated.push(path);
    }

    Ok(generated)
}

/// Metric means per factor level for one algorithm, as a line with
/// asymmetric vertical error bars.
fn line_chart(
    path: &Path,
    algorithm: Algorithm,
    factor: Factor,
    metric: Metric,
    confidence: f64,
    levels: &[String],
    stats: &[AggregateStat],
) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = y_range(stats);
    let x_max = levels.len().saturating_sub(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} por {} - {}", metric.title(), factor.title(), algorithm),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max + 0.5, y_min..y_max)?;

    let labels = levels.to_vec();
    chart
        .configure_mesh()
        .x_desc(factor.title())
        .y_desc(metric.title())
        .x_labels(levels.len().max(2))
        .x_label_formatter(&move |x| level_label(&labels, *x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            stats.iter().enumerate().map(|(i, s)| (i as f64, s.mean)),
            &SERIES_COLOR,
        ))?
        .label(format!("{} (IC {:.0}%)", algorithm, confidence * 100.0))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES_COLOR));

    chart.draw_series(
        stats
            .iter()
            .enumerate()
            .map(|(i, s)| Circle::new((i as f64, s.mean), 4, SERIES_COLOR.filled())),
    )?;

    chart.draw_series(stats.iter().enumerate().map(|(i, s)| {
        ErrorBar::new_vertical(i as f64, s.ci_low, s.mean, s.ci_high, SERIES_COLOR.filled(), 10)
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Metric means per algorithm over all factors, as colored bars with error
/// bars and a value label above each bar.
fn global_bar_chart(path: &Path, metric: Metric, stats: &[AggregateStat]) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = bar_y_range(stats);
    let x_max = stats.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} - Comparação Global", metric.title()),
            ("sans-serif", 32),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)?;

    let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(metric.title())
        .x_labels(stats.len().max(2))
        .x_label_formatter(&move |x| level_label(&names, *x))
        .draw()?;

    for (i, (algorithm, stat)) in Algorithm::ALL.iter().zip(stats).enumerate() {
        let x = i as f64;
        let color = ALGO_COLORS[i];

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, stat.mean)],
                color.mix(0.8).filled(),
            )))?
            .label(algorithm.as_str())
            .legend(move |(lx, ly)| {
                Rectangle::new([(lx, ly - 5), (lx + 12, ly + 5)], color.filled())
            });
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - 0.4, 0.0), (x + 0.4, stat.mean)],
            BLACK.stroke_width(1),
        )))?;

        chart.draw_series(std::iter::once(ErrorBar::new_vertical(
            x,
            stat.ci_low,
            stat.mean,
            stat.ci_high,
            BLACK.filled(),
            12,
        )))?;

        let label_style = ("sans-serif", 18)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.2}", stat.mean),
            (x, stat.mean),
            label_style,
        )))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Tick label for an indexed categorical axis: the level name at integer
/// positions, empty everywhere else.
fn level_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() < 0.25 && idx >= 0.0 && (idx as usize) < labels.len() {
        labels[idx as usize].clone()
    } else {
        String::new()
    }
}

/// Y range for the bar chart: the zero baseline, extended downward when a
/// wide interval reaches below it, with headroom above for the value labels.
fn bar_y_range(stats: &[AggregateStat]) -> (f64, f64) {
    let top = stats
        .iter()
        .map(|s| s.ci_high.max(s.mean))
        .fold(0.0f64, f64::max);
    let bottom = stats.iter().map(|s| s.ci_low).fold(0.0f64, f64::min);
    let y_max = if top > 0.0 { top * 1.2 } else { 1.0 };
    let y_min = if bottom < 0.0 { bottom * 1.1 } else { 0.0 };
    (y_min, y_max)
}

/// Y range covering every interval, with a little padding.
fn y_range(stats: &[AggregateStat]) -> (f64, f64) {
    let lo = stats.iter().map(|s| s.ci_low).fold(f64::INFINITY, f64::min);
    let hi = stats
        .iter()
        .map(|s| s.ci_high)
        .fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(hi.abs() * 0.01).max(0.1);
    (lo - pad, hi + pad)
}
