//! Optional date filter applied to the health-check count query.

use chrono::NaiveDate;

use crate::error::WindowError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive creation-date range understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Build a window, rejecting inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Inverted`] when `start` falls after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::Inverted {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse optional `YYYY-MM-DD` bounds. Both or neither must be present.
    ///
    /// # Errors
    ///
    /// Returns an error when exactly one bound is supplied, when a bound does not
    /// parse, or when the range is inverted.
    pub fn from_bounds(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<Self>, WindowError> {
        match (start, end) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(WindowError::MissingBound {
                missing: "end_date",
            }),
            (None, Some(_)) => Err(WindowError::MissingBound {
                missing: "start_date",
            }),
            (Some(start), Some(end)) => {
                let start = parse_date("start_date", start)?;
                let end = parse_date("end_date", end)?;
                Self::new(start, end).map(Some)
            }
        }
    }

    /// First day included in the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day included in the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Query parameters in the order the backend documents them.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format(DATE_FORMAT).to_string()),
            ("end_date", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| WindowError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_bounds_mean_no_window() -> Result<(), WindowError> {
        assert_eq!(DateWindow::from_bounds(None, None)?, None);
        Ok(())
    }

    #[test]
    fn single_bound_is_rejected() {
        assert_eq!(
            DateWindow::from_bounds(Some("2024-01-01"), None),
            Err(WindowError::MissingBound {
                missing: "end_date"
            })
        );
        assert_eq!(
            DateWindow::from_bounds(None, Some("2024-01-01")),
            Err(WindowError::MissingBound {
                missing: "start_date"
            })
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = DateWindow::from_bounds(Some("01/02/2024"), Some("2024-02-01"));
        assert!(matches!(
            result,
            Err(WindowError::InvalidDate {
                field: "start_date",
                ..
            })
        ));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let result = DateWindow::from_bounds(Some("2024-03-01"), Some("2024-02-01"));
        assert!(matches!(result, Err(WindowError::Inverted { .. })));
    }

    #[test]
    fn query_pairs_round_trip_input() -> Result<(), WindowError> {
        let window = DateWindow::from_bounds(Some("2024-01-01"), Some("2024-01-31"))?
            .ok_or(WindowError::MissingBound { missing: "window" })?;
        let [start, end] = window.query_pairs();
        assert_eq!(start, ("start_date", "2024-01-01".to_string()));
        assert_eq!(end, ("end_date", "2024-01-31".to_string()));
        Ok(())
    }

    #[test]
    fn same_day_window_is_allowed() -> Result<(), WindowError> {
        let window = DateWindow::from_bounds(Some("2024-05-05"), Some("2024-05-05"))?;
        assert!(window.is_some());
        Ok(())
    }
}
