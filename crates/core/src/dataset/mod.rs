//! Ingested source tables.
//!
//! The three tables are loaded once and never mutated:
//! - Business hierarchy (departments)
//! - Loan origination cases (transactions)
//! - Users

pub mod types;

pub use types::{
    Dataset, DatasetPreview, HierarchyRecord, RowCounts, TransactionRecord, UserRecord,
};
