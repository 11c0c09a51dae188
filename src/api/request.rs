//! Request types for the attendance engine API.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Query parameters for the `/analytics` endpoint.
///
/// All three parameters are required; they are modelled as options so the
/// handler can report every missing name in one validation error instead
/// of surfacing an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    /// The employee name to report on.
    pub employee: Option<String>,
    /// Target month, 1-12.
    pub month: Option<u32>,
    /// Target year.
    pub year: Option<i32>,
}

impl ReportQuery {
    /// Validates presence of all parameters and the month range.
    pub fn validated(self) -> EngineResult<(String, u32, i32)> {
        let mut missing = Vec::new();
        if self.employee.is_none() {
            missing.push("employee");
        }
        if self.month.is_none() {
            missing.push("month");
        }
        if self.year.is_none() {
            missing.push("year");
        }

        match (self.employee, self.month, self.year) {
            (Some(employee), Some(month), Some(year)) => {
                if !(1..=12).contains(&month) {
                    return Err(EngineError::InvalidMonth { month });
                }
                Ok((employee, month, year))
            }
            _ => Err(EngineError::MissingParameters {
                names: missing.join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_query_validates() {
        let query = ReportQuery {
            employee: Some("Alice".to_string()),
            month: Some(3),
            year: Some(2024),
        };
        assert_eq!(query.validated().unwrap(), ("Alice".to_string(), 3, 2024));
    }

    #[test]
    fn test_missing_parameters_are_all_reported() {
        let query = ReportQuery {
            employee: None,
            month: None,
            year: Some(2024),
        };
        match query.validated() {
            Err(EngineError::MissingParameters { names }) => {
                assert_eq!(names, "employee, month");
            }
            other => panic!("Expected MissingParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        for month in [0, 13] {
            let query = ReportQuery {
                employee: Some("Alice".to_string()),
                month: Some(month),
                year: Some(2024),
            };
            assert!(matches!(
                query.validated(),
                Err(EngineError::InvalidMonth { .. })
            ));
        }
    }
}
