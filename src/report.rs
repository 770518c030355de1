//! Text and JSON rendering of a [`Distribution`].
//!
//! Uniform layout:
//! ```text
//! Most likely sum of 3d6 is 10 at 12.50% or 27/216 times.
//! Sums by probability:
//! 010: 12.50%(27/216)
//! ```
//! Mixed layout:
//! ```text
//! 0005: 0.00 (1/115200)
//! Rolling 2d6 and 1d8 and 2d20
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::config::{OutputFormat, ReportConfig, ReportLayout};
use crate::distribution::Distribution;
use crate::types::SumBucket;

/// `0.125` -> `"12.50%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

pub fn write_report<W: Write>(
    out: &mut W,
    dist: &Distribution,
    cfg: &ReportConfig,
) -> io::Result<()> {
    if let Some(warning) = cfg.sort.warning() {
        tracing::warn!(requested = ?cfg.sort, "unknown sort method, using probability");
        if cfg.format == OutputFormat::Json {
            return write_json(out, dist, cfg, Some(warning));
        }
    }
    match (cfg.format, cfg.layout) {
        (OutputFormat::Json, _) => write_json(out, dist, cfg, None),
        (OutputFormat::Text, ReportLayout::Uniform) => write_uniform(out, dist, cfg),
        (OutputFormat::Text, ReportLayout::Mixed) => write_mixed(out, dist, cfg),
    }
}

/// Report to a `String`; handy for tests and logging.
pub fn render_report(dist: &Distribution, cfg: &ReportConfig) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, dist, cfg)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_uniform<W: Write>(out: &mut W, dist: &Distribution, cfg: &ReportConfig) -> io::Result<()> {
    let total = dist.total_outcomes();
    let best = dist.most_likely();
    writeln!(
        out,
        "Most likely sum of {} is {} at {} or {:02}/{} times.",
        cfg.spec,
        best.sum,
        format_percent(best.probability),
        best.count,
        total
    )?;

    if !cfg.show_breakdown || !cfg.sort.is_set() {
        return Ok(());
    }
    if let Some(warning) = cfg.sort.warning() {
        writeln!(out, "{}", warning)?;
    }
    writeln!(out, "Sums by {}: ", cfg.sort.name())?;
    for b in dist.sorted(&cfg.sort, cfg.order) {
        writeln!(
            out,
            "{:03}: {}({:02}/{})",
            b.sum,
            format_percent(b.probability),
            b.count,
            total
        )?;
    }
    Ok(())
}

fn write_mixed<W: Write>(out: &mut W, dist: &Distribution, cfg: &ReportConfig) -> io::Result<()> {
    let total = dist.total_outcomes();
    if cfg.show_breakdown {
        if let Some(warning) = cfg.sort.warning() {
            writeln!(out, "{}", warning)?;
        }
        for b in dist.sorted(&cfg.sort, cfg.order) {
            writeln!(
                out,
                "{:04}: {:02.2} ({}/{})",
                b.sum,
                b.probability * 100.0,
                b.count,
                total
            )?;
        }
    }
    writeln!(out, "Rolling {}", cfg.spec)
}

#[derive(Serialize)]
struct JsonReport {
    dice: String,
    total_outcomes: u64,
    lowest: u64,
    highest: u64,
    mean: f64,
    variance: f64,
    std_dev: f64,
    most_likely: SumBucket,
    sort: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    buckets: Vec<SumBucket>,
}

/// Every bucket is emitted in the configured order; `show_breakdown` only
/// affects the text layouts.
fn write_json<W: Write>(
    out: &mut W,
    dist: &Distribution,
    cfg: &ReportConfig,
    warning: Option<String>,
) -> io::Result<()> {
    let report = JsonReport {
        dice: cfg.spec.to_string(),
        total_outcomes: dist.total_outcomes(),
        lowest: dist.lowest(),
        highest: dist.highest(),
        mean: dist.mean(),
        variance: dist.variance(),
        std_dev: dist.std_dev(),
        most_likely: *dist.most_likely(),
        sort: cfg.sort.name(),
        warning,
        buckets: dist.sorted(&cfg.sort, cfg.order),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
