//! Ingest error types.

use std::path::PathBuf;

use los_shared::AppError;
use thiserror::Error;

/// Structural role of a sheet in the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    /// Business hierarchy (departments), sheet 0.
    Hierarchy,
    /// Loan origination cases, sheet 1.
    Transactions,
    /// Users, sheet 2.
    Users,
}

impl TableRole {
    /// Position of the sheet holding this table.
    #[must_use]
    pub const fn sheet_index(self) -> usize {
        match self {
            Self::Hierarchy => 0,
            Self::Transactions => 1,
            Self::Users => 2,
        }
    }

    /// Table name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hierarchy => "hierarchy",
            Self::Transactions => "transactions",
            Self::Users => "users",
        }
    }
}

impl std::fmt::Display for TableRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that abort ingest.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The workbook file does not exist.
    #[error("data source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The workbook exists but cannot be parsed.
    #[error("data source {} is unreadable: {reason}", .path.display())]
    Unreadable {
        /// Workbook path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The workbook has too few sheets.
    #[error("{role} sheet missing: expected sheet #{index}, workbook has {found} sheet(s)")]
    SheetMissing {
        /// Missing table.
        role: TableRole,
        /// Expected sheet position.
        index: usize,
        /// Number of sheets present.
        found: usize,
    },

    /// A required header is absent.
    #[error("{role} sheet is missing required column {column}")]
    ColumnMissing {
        /// Table being read.
        role: TableRole,
        /// Required header.
        column: &'static str,
    },

    /// A cell holds a value of the wrong type.
    #[error("{role} sheet row {row}, column {column}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Table being read.
        role: TableRole,
        /// 1-based sheet row, header included.
        row: usize,
        /// Column header.
        column: &'static str,
        /// Expected type.
        expected: &'static str,
        /// Description of the cell found.
        found: String,
    },

    /// A required cell is empty.
    #[error("{role} sheet row {row}, column {column}: value is required")]
    EmptyCell {
        /// Table being read.
        role: TableRole,
        /// 1-based sheet row, header included.
        row: usize,
        /// Column header.
        column: &'static str,
    },
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        Self::DataSource(err.to_string())
    }
}
