//! Source table record types.

use chrono::{Datelike, NaiveDateTime};
use los_shared::types::{HierarchyId, TransactionId, UserId};
use serde::{Deserialize, Serialize};

/// One organizational unit of the business hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyRecord {
    /// Hierarchy unit ID.
    pub id: HierarchyId,
    /// Department title.
    pub title: String,
}

/// One loan origination case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Case ID.
    pub id: TransactionId,
    /// Owning department.
    pub hierarchy_id: HierarchyId,
    /// User who created the case.
    pub created_by: UserId,
    /// Creation timestamp.
    pub created_on: NaiveDateTime,
    /// Whether the case is still open.
    pub in_progress: bool,
    /// Raw workflow step code (2 approved, 3 rejected, 4 revert, 5 forward).
    pub workflow_step_type_id: Option<i32>,
}

/// One user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

/// The three ingested tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Business hierarchy rows.
    pub hierarchy: Vec<HierarchyRecord>,
    /// Transaction rows.
    pub transactions: Vec<TransactionRecord>,
    /// User rows.
    pub users: Vec<UserRecord>,
}

/// Leading rows of each table, for the data tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPreview {
    /// First hierarchy rows.
    pub hierarchy: Vec<HierarchyRecord>,
    /// First transaction rows.
    pub transactions: Vec<TransactionRecord>,
    /// First user rows.
    pub users: Vec<UserRecord>,
    /// Total rows per table.
    pub row_counts: RowCounts,
}

/// Row counts of the three tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCounts {
    /// Hierarchy row count.
    pub hierarchy: usize,
    /// Transaction row count.
    pub transactions: usize,
    /// User row count.
    pub users: usize,
}

impl Dataset {
    /// Creates a dataset from its three tables.
    #[must_use]
    pub fn new(
        hierarchy: Vec<HierarchyRecord>,
        transactions: Vec<TransactionRecord>,
        users: Vec<UserRecord>,
    ) -> Self {
        Self {
            hierarchy,
            transactions,
            users,
        }
    }

    /// Returns the row counts of the three tables.
    #[must_use]
    pub fn row_counts(&self) -> RowCounts {
        RowCounts {
            hierarchy: self.hierarchy.len(),
            transactions: self.transactions.len(),
            users: self.users.len(),
        }
    }

    /// Returns the first `rows` rows of each table.
    #[must_use]
    pub fn preview(&self, rows: usize) -> DatasetPreview {
        DatasetPreview {
            hierarchy: self.hierarchy.iter().take(rows).cloned().collect(),
            transactions: self.transactions.iter().take(rows).cloned().collect(),
            users: self.users.iter().take(rows).cloned().collect(),
            row_counts: self.row_counts(),
        }
    }

    /// Returns the sorted distinct calendar years in which cases were created.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .transactions
            .iter()
            .map(|t| t.created_on.year())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
