//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use healthboard_core::{DashboardSummary, HealthCheckJob};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

const NAME_WIDTH: usize = 32;

pub(crate) fn render_dashboard(summary: &DashboardSummary, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(summary)?),
        OutputFormat::Table => {
            print!("{}", format_panel(summary));
            println!();
            print!("{}", format_table(summary));
        }
    }
    Ok(())
}

pub(crate) fn render_submission(job: &HealthCheckJob) {
    println!("submitted job {}", job.uuid);
    println!("sync app: {}", job.sync_app_id);
    println!(
        "checks: {} ({} failing)",
        job.checks.len(),
        job.failing_checks()
    );
}

/// Pretty-printed `DashboardSummary` as emitted by `--output json`.
pub(crate) fn format_json(summary: &DashboardSummary) -> CliResult<String> {
    serde_json::to_string_pretty(summary)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

/// Totals tiles shown above the table.
pub(crate) fn format_panel(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:>10}", "FAILED CHECKS", summary.total_failed);
    let _ = writeln!(out, "{:<14} {:>10}", "TOTAL CHECKS", summary.total_count);
    out
}

/// Per-check rows in input order.
pub(crate) fn format_table(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>9} {:<8} {:>10}",
        "NAME", "STATUS ID", "STATUS", "COUNT"
    );
    if summary.is_empty() {
        let _ = writeln!(out, "no health-check records");
        return out;
    }
    for item in &summary.summaries {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:>9} {:<8} {:>10}",
            truncate(&item.name, NAME_WIDTH),
            item.status_id,
            item.status.as_str(),
            item.count
        );
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut shortened: String = value.chars().take(width.saturating_sub(1)).collect();
    shortened.push('~');
    shortened
}
