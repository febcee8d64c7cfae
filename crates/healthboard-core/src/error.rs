//! Validation errors for job reports and date windows.
//!
//! # Design
//! - Keep error messages constant while carrying context fields for debugging.

use thiserror::Error;

/// Maximum length of a plugin name accepted by the backend.
pub const MAX_CHECK_NAME_LEN: usize = 50;
/// Maximum length of the job UUID and sync app identifier fields.
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// A job report failed local validation before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobValidationError {
    /// The report carried no checks.
    #[error("job report has no checks")]
    NoChecks,
    /// A required string field was empty.
    #[error("required field is empty")]
    EmptyField {
        /// Field name.
        field: &'static str,
        /// Index of the offending check, when the field belongs to one.
        index: Option<usize>,
    },
    /// A string field exceeded the backend's column width.
    #[error("field exceeds maximum length")]
    TooLong {
        /// Field name.
        field: &'static str,
        /// Index of the offending check, when the field belongs to one.
        index: Option<usize>,
        /// Allowed length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },
}

impl JobValidationError {
    /// Operator-facing message including the context fields.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::NoChecks => "job report must contain at least one check".to_string(),
            Self::EmptyField { field, index } => {
                format!("{} must not be empty", field_path(field, *index))
            }
            Self::TooLong {
                field,
                index,
                max,
                actual,
            } => format!(
                "{} is {actual} characters (max {max})",
                field_path(field, *index)
            ),
        }
    }
}

/// A date window could not be built from the supplied bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Only one of the two bounds was supplied.
    #[error("date window requires both bounds")]
    MissingBound {
        /// Name of the missing bound.
        missing: &'static str,
    },
    /// A bound was not a `YYYY-MM-DD` date.
    #[error("invalid date")]
    InvalidDate {
        /// Name of the bound.
        field: &'static str,
        /// Raw value supplied by the caller.
        value: String,
    },
    /// The start date falls after the end date.
    #[error("date window is inverted")]
    Inverted {
        /// Start bound as supplied.
        start: String,
        /// End bound as supplied.
        end: String,
    },
}

impl WindowError {
    /// Operator-facing message including the context fields.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::MissingBound { missing } => {
                format!("{missing} is required when filtering by date")
            }
            Self::InvalidDate { field, value } => {
                format!("{field} '{value}' is not a YYYY-MM-DD date")
            }
            Self::Inverted { start, end } => {
                format!("start date {start} is after end date {end}")
            }
        }
    }
}

fn field_path(field: &str, index: Option<usize>) -> String {
    index.map_or_else(|| field.to_string(), |idx| format!("checks[{idx}].{field}"))
}
