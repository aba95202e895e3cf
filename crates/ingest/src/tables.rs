//! Typed extraction of the three dashboard tables.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDateTime;
use los_core::dataset::{Dataset, HierarchyRecord, TransactionRecord, UserRecord};
use los_shared::types::{HierarchyId, TransactionId, UserId};
use tracing::{info, warn};

use crate::error::{IngestError, TableRole};
use crate::workbook::{Cell, Sheet, Workbook, WorkbookSource};

/// Hierarchy sheet headers.
pub mod hierarchy_columns {
    /// Department ID.
    pub const ID: &str = "BUSINESSHIERARCHY_ID";
    /// Department title.
    pub const TITLE: &str = "TITLE";
}

/// Transaction sheet headers.
pub mod transaction_columns {
    /// Case ID.
    pub const ID: &str = "TRANSACTION_ID";
    /// Owning department.
    pub const HIERARCHY_ID: &str = "BUSINESSHIERARCHY_ID";
    /// Creating user.
    pub const CREATED_BY: &str = "CREATEDBY";
    /// Creation timestamp.
    pub const CREATED_ON: &str = "CREATEDON";
    /// Open flag.
    pub const IN_PROGRESS: &str = "IN_PROGRESS";
    /// Workflow step code.
    pub const WORKFLOW_STEP_TYPE_ID: &str = "WORKFLOWSTEPTYPE_ID";
}

/// User sheet headers.
pub mod user_columns {
    /// User ID.
    pub const ID: &str = "USER_ID";
    /// Display name.
    pub const NAME: &str = "NAME";
}

/// Loads workbooks into a [`Dataset`].
pub struct Ingestor;

impl Ingestor {
    /// Loads a workbook from a source and extracts the three tables.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read, a sheet or required column is
    /// missing, or a cell has the wrong type.
    pub fn load(source: &impl WorkbookSource) -> Result<Dataset, IngestError> {
        let workbook = source.load()?;
        Self::from_workbook(&workbook)
    }

    /// Extracts the three tables from an already loaded workbook.
    pub fn from_workbook(workbook: &Workbook) -> Result<Dataset, IngestError> {
        let hierarchy = read_hierarchy(&SheetReader::for_role(workbook, TableRole::Hierarchy)?)?;
        let transactions =
            read_transactions(&SheetReader::for_role(workbook, TableRole::Transactions)?)?;
        let users = read_users(&SheetReader::for_role(workbook, TableRole::Users)?)?;

        warn_duplicates(TableRole::Hierarchy, hierarchy.iter().map(|h| h.id));
        warn_duplicates(TableRole::Users, users.iter().map(|u| u.id));

        info!(
            hierarchy = hierarchy.len(),
            transactions = transactions.len(),
            users = users.len(),
            "Dataset ingested"
        );

        Ok(Dataset::new(hierarchy, transactions, users))
    }
}

fn read_hierarchy(reader: &SheetReader<'_>) -> Result<Vec<HierarchyRecord>, IngestError> {
    use hierarchy_columns::{ID, TITLE};

    let id = reader.column(ID)?;
    let title = reader.column(TITLE)?;

    reader
        .rows()
        .map(|row| {
            Ok(HierarchyRecord {
                id: HierarchyId::new(row.int(id)?),
                title: row.text(title)?,
            })
        })
        .collect()
}

fn read_transactions(reader: &SheetReader<'_>) -> Result<Vec<TransactionRecord>, IngestError> {
    use transaction_columns::{
        CREATED_BY, CREATED_ON, HIERARCHY_ID, ID, IN_PROGRESS, WORKFLOW_STEP_TYPE_ID,
    };

    let id = reader.column(ID)?;
    let hierarchy_id = reader.column(HIERARCHY_ID)?;
    let created_by = reader.column(CREATED_BY)?;
    let created_on = reader.column(CREATED_ON)?;
    let in_progress = reader.column(IN_PROGRESS)?;
    let step = reader.column(WORKFLOW_STEP_TYPE_ID)?;

    reader
        .rows()
        .map(|row| {
            Ok(TransactionRecord {
                id: TransactionId::new(row.int(id)?),
                hierarchy_id: HierarchyId::new(row.int(hierarchy_id)?),
                created_by: UserId::new(row.int(created_by)?),
                created_on: row.datetime(created_on)?,
                in_progress: row.flag(in_progress)?,
                workflow_step_type_id: row.small_int(step)?,
            })
        })
        .collect()
}

fn read_users(reader: &SheetReader<'_>) -> Result<Vec<UserRecord>, IngestError> {
    use user_columns::{ID, NAME};

    let id = reader.column(ID)?;
    let name = reader.column(NAME)?;

    reader
        .rows()
        .map(|row| {
            Ok(UserRecord {
                id: UserId::new(row.int(id)?),
                name: row.text(name)?,
            })
        })
        .collect()
}

fn warn_duplicates<K: Eq + Hash + Copy + std::fmt::Display>(
    role: TableRole,
    ids: impl Iterator<Item = K>,
) {
    let mut seen = HashSet::new();
    let mut duplicates = 0usize;
    let mut first = None;
    for id in ids {
        if !seen.insert(id) {
            duplicates += 1;
            first.get_or_insert(id);
        }
    }
    if let Some(example) = first {
        warn!(
            table = %role,
            duplicates,
            example = %example,
            "Duplicate ids in lookup table; the first row for each id is used"
        );
    }
}

/// A resolved header position.
#[derive(Debug, Clone, Copy)]
struct Column {
    name: &'static str,
    index: usize,
}

/// Reads one sheet in its table role.
struct SheetReader<'w> {
    role: TableRole,
    sheet: &'w Sheet,
}

impl<'w> SheetReader<'w> {
    fn for_role(workbook: &'w Workbook, role: TableRole) -> Result<Self, IngestError> {
        let sheet = workbook
            .sheets
            .get(role.sheet_index())
            .ok_or(IngestError::SheetMissing {
                role,
                index: role.sheet_index(),
                found: workbook.sheets.len(),
            })?;
        Ok(Self { role, sheet })
    }

    fn column(&self, name: &'static str) -> Result<Column, IngestError> {
        self.sheet
            .column_index(name)
            .map(|index| Column { name, index })
            .ok_or(IngestError::ColumnMissing {
                role: self.role,
                column: name,
            })
    }

    /// Data rows with their 1-based sheet row number. Fully blank rows are skipped.
    fn rows(&self) -> impl Iterator<Item = Row<'w>> {
        let role = self.role;
        let first = self.sheet.header_row + 1;
        self.sheet
            .rows
            .iter()
            .enumerate()
            .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
            .map(move |(i, cells)| Row {
                role,
                number: first + i,
                cells,
            })
    }
}

/// One data row.
struct Row<'w> {
    role: TableRole,
    number: usize,
    cells: &'w [Cell],
}

impl Row<'_> {
    fn cell(&self, column: Column) -> &Cell {
        self.cells.get(column.index).unwrap_or(&Cell::Empty)
    }

    fn required(&self, column: Column) -> Result<&Cell, IngestError> {
        let cell = self.cell(column);
        if cell.is_empty() {
            return Err(IngestError::EmptyCell {
                role: self.role,
                row: self.number,
                column: column.name,
            });
        }
        Ok(cell)
    }

    fn mismatch(&self, column: Column, expected: &'static str, cell: &Cell) -> IngestError {
        IngestError::TypeMismatch {
            role: self.role,
            row: self.number,
            column: column.name,
            expected,
            found: cell.describe(),
        }
    }

    fn int(&self, column: Column) -> Result<i64, IngestError> {
        let cell = self.required(column)?;
        cell.as_i64()
            .ok_or_else(|| self.mismatch(column, "integer", cell))
    }

    fn small_int(&self, column: Column) -> Result<Option<i32>, IngestError> {
        let cell = self.cell(column);
        if cell.is_empty() {
            return Ok(None);
        }
        cell.as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| self.mismatch(column, "small integer", cell))
    }

    fn text(&self, column: Column) -> Result<String, IngestError> {
        let cell = self.required(column)?;
        cell.as_text()
            .ok_or_else(|| self.mismatch(column, "text", cell))
    }

    fn flag(&self, column: Column) -> Result<bool, IngestError> {
        let cell = self.required(column)?;
        cell.as_bool()
            .ok_or_else(|| self.mismatch(column, "boolean or 0/1", cell))
    }

    fn datetime(&self, column: Column) -> Result<NaiveDateTime, IngestError> {
        let cell = self.required(column)?;
        cell.as_datetime()
            .ok_or_else(|| self.mismatch(column, "date-time", cell))
    }
}
