//! Workbook ingest for the LOS dashboard.
//!
//! This crate turns a spreadsheet into the three typed tables the pipeline
//! consumes:
//! - `workbook` - Untyped sheets and the `WorkbookSource` seam
//! - `xlsx` - Spreadsheet files read through calamine
//! - `tables` - Header validation and typed row extraction
//! - `error` - Ingest failures

pub mod error;
pub mod tables;
pub mod workbook;
pub mod xlsx;

pub use error::{IngestError, TableRole};
pub use tables::Ingestor;
pub use workbook::{Cell, MemorySource, Sheet, Workbook, WorkbookSource};
pub use xlsx::XlsxSource;
