//! Case status categorizations.
//!
//! Two deliberately separate views of the raw workflow step code:
//! - `CaseStatus` drives the department/user status breakdowns
//! - `WorkflowStep` drives the KPI tiles

pub mod types;

pub use types::{CaseStatus, WorkflowStep};
