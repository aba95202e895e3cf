//! Core pipeline for the loan origination dashboard.
//!
//! This crate contains pure transformations with ZERO web or io dependencies.
//! Input is an already-ingested [`dataset::Dataset`]; output is plain data
//! ready for charts and tables.
//!
//! # Modules
//!
//! - `dataset` - The three source tables
//! - `status` - Workflow code categorizations
//! - `aging` - Aging bucket enrichment
//! - `aggregation` - Joins, grouped counts, KPIs and volumes
//! - `matrix` - Aging matrices
//! - `dashboard` - One-call assembly of every view

pub mod aggregation;
pub mod aging;
pub mod dashboard;
pub mod dataset;
pub mod matrix;
pub mod status;

#[cfg(test)]
mod test_support;
