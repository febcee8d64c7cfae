//! Health-check job reports posted by monitoring agents.
//!
//! A report bundles the result of every plugin run during one monitor cycle and
//! is attributed to a registered service via `sync_app_id`. The dashboard counts
//! are aggregated server-side from these reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JobValidationError, MAX_CHECK_NAME_LEN, MAX_IDENTIFIER_LEN};

/// Result of a single health-check plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginCheck {
    /// Plugin identifier.
    pub name: String,
    /// Raw status code; `1` means the plugin passed.
    pub status: i64,
    /// Pretty status text reported by the plugin.
    pub message: String,
}

/// One monitor cycle's report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheckJob {
    /// Unique report identifier.
    pub uuid: String,
    /// When the checks ran.
    pub timestamp: DateTime<Utc>,
    /// Identifier of the registered service that produced the report.
    pub sync_app_id: String,
    /// Plugin results.
    pub checks: Vec<PluginCheck>,
}

impl HealthCheckJob {
    /// Stamp a new report with a random identifier and the current time.
    #[must_use]
    pub fn new(sync_app_id: impl Into<String>, checks: Vec<PluginCheck>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            sync_app_id: sync_app_id.into(),
            checks,
        }
    }

    /// Number of checks that did not report the working status.
    #[must_use]
    pub fn failing_checks(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| crate::summary::classify(check.status).is_failing())
            .count()
    }

    /// Apply the backend's field rules before sending.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    pub fn validate(&self) -> Result<(), JobValidationError> {
        check_text("uuid", None, &self.uuid, MAX_IDENTIFIER_LEN)?;
        check_text("sync_app_id", None, &self.sync_app_id, MAX_IDENTIFIER_LEN)?;
        if self.checks.is_empty() {
            return Err(JobValidationError::NoChecks);
        }
        for (index, check) in self.checks.iter().enumerate() {
            check_text("name", Some(index), &check.name, MAX_CHECK_NAME_LEN)?;
            if check.message.trim().is_empty() {
                return Err(JobValidationError::EmptyField {
                    field: "message",
                    index: Some(index),
                });
            }
        }
        Ok(())
    }
}

fn check_text(
    field: &'static str,
    index: Option<usize>,
    value: &str,
    max: usize,
) -> Result<(), JobValidationError> {
    if value.trim().is_empty() {
        return Err(JobValidationError::EmptyField { field, index });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(JobValidationError::TooLong {
            field,
            index,
            max,
            actual,
        });
    }
    Ok(())
}
