//! Dashboard error types.

use los_shared::AppError;
use los_shared::types::ParseSortOrderError;
use thiserror::Error;

/// Errors raised while interpreting dashboard options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// Sort order is neither ascending nor descending.
    #[error("Invalid sort order: {0} (expected \"ascending\" or \"descending\")")]
    InvalidSortOrder(String),

    /// Year is not an integer.
    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

impl From<ParseSortOrderError> for DashboardError {
    fn from(err: ParseSortOrderError) -> Self {
        Self::InvalidSortOrder(err.0)
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_errors_are_validation_errors() {
        let err: AppError = DashboardError::InvalidYear("20x4".to_string()).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("20x4"));
    }

    #[test]
    fn test_sort_parse_error_keeps_raw_value() {
        let err: DashboardError = "up".parse::<los_shared::types::SortOrder>().unwrap_err().into();
        assert_eq!(err, DashboardError::InvalidSortOrder("up".to_string()));
    }
}
