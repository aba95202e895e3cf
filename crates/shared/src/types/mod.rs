//! Common types used across the application.

pub mod id;
pub mod sort;

pub use id::*;
pub use sort::{ParseSortOrderError, SortOrder};
