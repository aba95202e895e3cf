//! Aging matrices: pending cases pivoted by group and aging bucket.

pub mod builder;
pub mod types;


pub use builder::MatrixBuilder;
pub use types::{AgingMatrix, AgingMatrixRow};
