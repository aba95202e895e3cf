//! Aging matrix types.

use serde::{Deserialize, Serialize};

use crate::aggregation::{Dimension, GroupKey};
use crate::aging::AgingBucket;

/// One matrix row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingMatrixRow {
    /// Department title or user name.
    pub group_key: GroupKey,
    /// Counts aligned with [`AgingMatrix::columns`].
    pub counts: Vec<u64>,
    /// Row sum.
    pub total: u64,
}

/// Pending cases per group and aging bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingMatrix {
    /// Grouping dimension.
    pub dimension: Dimension,
    /// Populated buckets, in bucket order.
    pub columns: Vec<AgingBucket>,
    /// One row per group with at least one pending case.
    pub rows: Vec<AgingMatrixRow>,
    /// Column sums aligned with `columns`.
    pub column_totals: Vec<u64>,
    /// Sum of all cells.
    pub grand_total: u64,
}

impl AgingMatrix {
    /// Finds the row for a group.
    #[must_use]
    pub fn row(&self, group_key: Option<&str>) -> Option<&AgingMatrixRow> {
        self.rows
            .iter()
            .find(|row| row.group_key.as_deref() == group_key)
    }

    /// Returns a cell, or `None` if the row or column is absent.
    #[must_use]
    pub fn cell(&self, group_key: Option<&str>, bucket: AgingBucket) -> Option<u64> {
        let column = self.columns.iter().position(|c| *c == bucket)?;
        self.row(group_key).map(|row| row.counts[column])
    }

    /// Returns true if there are no pending cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
