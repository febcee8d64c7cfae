//! Wire records returned by the backend and the summaries derived from them.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::summary::classify;

/// One health-check job's last observed status and how often it was seen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheckCount {
    /// Plugin identifier reported by the monitor (e.g. `DatabaseBackend`).
    pub name: String,
    /// Raw status code; `1` means the check passed.
    pub status: i64,
    /// Number of stored results with this name/status pair.
    pub count: u64,
}

/// Body shapes accepted from `GET /healthcheckjobs`.
///
/// The backend wraps results as `{"data": [...]}`; a bare array is accepted too.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HealthCheckCountResponse {
    /// `{"data": [...]}` envelope.
    Envelope {
        /// Wrapped records.
        data: Vec<HealthCheckCount>,
    },
    /// Bare JSON array.
    Bare(Vec<HealthCheckCount>),
}

impl HealthCheckCountResponse {
    /// Unwrap the records regardless of body shape.
    #[must_use]
    pub fn into_records(self) -> Vec<HealthCheckCount> {
        match self {
            Self::Envelope { data } | Self::Bare(data) => data,
        }
    }
}

/// Human-readable classification of a status code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// Status code matched the working sentinel.
    Working,
    /// Any other status code.
    Failing,
}

impl CheckStatus {
    /// Label used by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::Failing => "Failing",
        }
    }

    /// Whether this status counts toward the failed total.
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failing)
    }
}

impl Display for CheckStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A health-check record augmented with its status label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckSummary {
    /// Plugin identifier.
    pub name: String,
    /// Raw status code copied from the wire record.
    pub status_id: i64,
    /// Derived label.
    pub status: CheckStatus,
    /// Occurrence count copied from the wire record.
    pub count: u64,
}

impl HealthCheckSummary {
    /// Derive the summary for a single wire record.
    #[must_use]
    pub fn from_count(record: &HealthCheckCount) -> Self {
        Self {
            name: record.name.clone(),
            status_id: record.status,
            status: classify(record.status),
            count: record.count,
        }
    }
}

impl From<&HealthCheckCount> for HealthCheckSummary {
    fn from(record: &HealthCheckCount) -> Self {
        Self::from_count(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_accepts_envelope_and_bare_array() -> Result<(), serde_json::Error> {
        let envelope: HealthCheckCountResponse = serde_json::from_value(json!({
            "data": [{"name": "db", "status": 1, "count": 5}]
        }))?;
        let bare: HealthCheckCountResponse =
            serde_json::from_value(json!([{"name": "db", "status": 1, "count": 5}]))?;

        assert_eq!(envelope.clone().into_records(), bare.into_records());
        assert_eq!(envelope.into_records()[0].name, "db");
        Ok(())
    }

    #[test]
    fn response_rejects_unexpected_shape() {
        let result =
            serde_json::from_value::<HealthCheckCountResponse>(json!({"items": [], "total": 0}));
        assert!(result.is_err());
    }

    #[test]
    fn summary_serializes_camel_case_status_id() -> Result<(), serde_json::Error> {
        let summary = HealthCheckSummary::from_count(&HealthCheckCount {
            name: "cache".into(),
            status: 2,
            count: 3,
        });
        let value = serde_json::to_value(&summary)?;
        assert_eq!(
            value,
            json!({"name": "cache", "statusId": 2, "status": "Failing", "count": 3})
        );
        Ok(())
    }

    #[test]
    fn check_status_labels() {
        assert_eq!(CheckStatus::Working.to_string(), "Working");
        assert_eq!(CheckStatus::Failing.as_str(), "Failing");
        assert!(CheckStatus::Failing.is_failing());
        assert!(!CheckStatus::Working.is_failing());
    }
}
