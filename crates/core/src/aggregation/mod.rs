//! Joins and grouped counts behind the dashboard charts and KPI tiles.
//!
//! Every case is counted exactly once per dimension. Cases whose department
//! or creator cannot be resolved are grouped under a `None` key, never dropped.

pub mod join;
pub mod service;
pub mod types;


pub use join::{JoinedCase, JoinedCases};
pub use service::AggregationService;
pub use types::*;
