//! Dashboard assembly.
//!
//! This module runs the whole pipeline for one request:
//! - Enrichment with the caller's `now`
//! - Department and user joins
//! - KPI tiles, status breakdowns and aging matrices (main view)
//! - Year-filtered time series and department volume (extras view)

pub mod error;
pub mod service;
pub mod types;


pub use error::DashboardError;
pub use service::DashboardService;
pub use types::*;
