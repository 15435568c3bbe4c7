//! Read the first worksheet of a workbook into a Table

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::enrich::columns::normalize_headers;
use crate::enrich::error::{ReconcileError, Result};
use crate::enrich::table::{Cell, Table};

/// Read the first sheet of an xlsx/xlsm/xls/ods file
///
/// Row 1 is the header. Columns stay anchored at column A even when the used
/// range starts further right. Fully blank data rows are skipped, short rows
/// are padded to the header width.
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|source| ReconcileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReconcileError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| ReconcileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows();

    let header: Vec<Cell> = match rows.next() {
        Some(row) => anchored_row(row, start_col),
        None => Vec::new(),
    };

    let mut table = Table::new(normalize_headers(&header));

    for row in rows {
        let cells = anchored_row(row, start_col);
        if cells.iter().all(Cell::is_blank) {
            continue;
        }
        table.push_row(cells);
    }

    log::debug!(
        "Read {} rows x {} columns from sheet '{}' of {}",
        table.len(),
        table.columns.len(),
        sheet_name,
        path.display()
    );

    Ok(table)
}

/// Row cells prefixed with the blank columns left of the used range
fn anchored_row(row: &[Data], start_col: usize) -> Vec<Cell> {
    std::iter::repeat_n(Cell::Empty, start_col)
        .chain(row.iter().map(to_cell))
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
