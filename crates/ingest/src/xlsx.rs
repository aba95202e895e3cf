//! Spreadsheet files read through calamine.

use std::path::PathBuf;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::IngestError;
use crate::workbook::{Cell, Sheet, Workbook, WorkbookSource};

/// A workbook file (`.xlsx`, `.xlsm`, `.xls`, `.ods`).
#[derive(Debug, Clone)]
pub struct XlsxSource {
    path: PathBuf,
}

impl XlsxSource {
    /// Creates a source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn unreadable(&self, reason: impl ToString) -> IngestError {
        IngestError::Unreadable {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl WorkbookSource for XlsxSource {
    fn load(&self) -> Result<Workbook, IngestError> {
        if !self.path.is_file() {
            return Err(IngestError::SourceNotFound(self.path.clone()));
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.unreadable(e))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| self.unreadable(e))?;
            debug!(sheet = %name, rows = range.height(), "Read worksheet");
            sheets.push(sheet_from_range(name, &range));
        }

        Ok(Workbook::new(sheets))
    }
}

/// First row becomes the header; the rest are data rows.
///
/// calamine trims leading blank rows, so the header keeps the range's
/// absolute start row.
fn sheet_from_range(name: String, range: &Range<Data>) -> Sheet {
    let header_row = range
        .start()
        .and_then(|(row, _)| usize::try_from(row).ok())
        .map_or(1, |row| row + 1);
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| convert(cell).as_text().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    Sheet {
        name,
        header_row,
        headers,
        rows: rows.map(|row| row.iter().map(convert).collect()).collect(),
    }
}

fn convert(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or_else(|| Cell::Float(dt.as_f64()), Cell::DateTime),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
