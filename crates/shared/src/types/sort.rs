//! Chart ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chart ordering by total case count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Largest totals first.
    #[default]
    #[serde(alias = "desc")]
    Descending,
    /// Smallest totals first.
    #[serde(alias = "asc")]
    Ascending,
}

impl SortOrder {
    /// Compares two group totals under this ordering.
    ///
    /// Equal totals compare equal, so a stable sort keeps their input order.
    #[must_use]
    pub fn compare(self, a: u64, b: u64) -> Ordering {
        match self {
            Self::Descending => b.cmp(&a),
            Self::Ascending => a.cmp(&b),
        }
    }
}

/// A sort order that is neither ascending nor descending.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid sort order: {0} (expected \"ascending\" or \"descending\")")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Ok(Self::Descending),
            "asc" | "ascending" => Ok(Self::Ascending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("desc", SortOrder::Descending)]
    #[case("Descending", SortOrder::Descending)]
    #[case(" asc ", SortOrder::Ascending)]
    #[case("ASCENDING", SortOrder::Ascending)]
    fn test_sort_order_parses(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(raw.parse::<SortOrder>(), Ok(expected));
    }

    #[test]
    fn test_sort_order_rejects_unknown() {
        assert_eq!(
            "sideways".parse::<SortOrder>(),
            Err(ParseSortOrderError("sideways".to_string()))
        );
    }

    #[rstest]
    #[case("\"asc\"", SortOrder::Ascending)]
    #[case("\"ascending\"", SortOrder::Ascending)]
    #[case("\"desc\"", SortOrder::Descending)]
    fn test_sort_order_deserializes_short_forms(#[case] json: &str, #[case] expected: SortOrder) {
        assert_eq!(serde_json::from_str::<SortOrder>(json).unwrap(), expected);
    }
}
