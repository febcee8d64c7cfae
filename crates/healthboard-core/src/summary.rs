//! Working/failing classification and the aggregate totals.
//!
//! # Design
//! - `summarize` is pure: same input, same output, input order preserved.
//! - The working sentinel is fixed and never read from server data.

use serde::{Deserialize, Serialize};

use crate::model::{CheckStatus, HealthCheckCount, HealthCheckSummary};

/// Status code the monitor reports for a passing check.
pub const WORKING_STATUS_ID: i64 = 1;

/// Classify a raw status code.
#[must_use]
pub const fn classify(status_id: i64) -> CheckStatus {
    if status_id == WORKING_STATUS_ID {
        CheckStatus::Working
    } else {
        CheckStatus::Failing
    }
}

/// Per-item summaries plus the two totals shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// One summary per input record, in input order.
    pub summaries: Vec<HealthCheckSummary>,
    /// Sum of `count` across every record.
    pub total_count: u64,
    /// Sum of `count` across failing records.
    pub total_failed: u64,
}

impl DashboardSummary {
    /// Occurrences reported as working.
    #[must_use]
    pub const fn total_working(&self) -> u64 {
        self.total_count.saturating_sub(self.total_failed)
    }

    /// Whether the fetch returned no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// Derive summaries and totals from fetched records.
#[must_use]
pub fn summarize(records: &[HealthCheckCount]) -> DashboardSummary {
    let mut summary = DashboardSummary {
        summaries: Vec::with_capacity(records.len()),
        total_count: 0,
        total_failed: 0,
    };

    for record in records {
        let item = HealthCheckSummary::from_count(record);
        summary.total_count = summary.total_count.saturating_add(item.count);
        if item.status.is_failing() {
            summary.total_failed = summary.total_failed.saturating_add(item.count);
        }
        summary.summaries.push(item);
    }

    summary
}
