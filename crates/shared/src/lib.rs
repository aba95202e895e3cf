//! Shared types, errors, and configuration for the LOS dashboard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for the three source tables
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
