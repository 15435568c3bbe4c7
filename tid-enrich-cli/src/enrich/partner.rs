//! Partner list loading and placement of the new terminal column

use std::path::Path;

use super::columns::{ADDRESS_COLUMN, STATION_COLUMN, TERMINAL_COLUMN, find_column};
use super::error::{InputKind, ReconcileError, Result};
use super::excel::read_first_sheet;
use super::table::{Cell, Table};

/// Validate a raw partner table and normalize its station codes
///
/// Only the station column is required and touched; every other column is
/// kept as read.
pub fn prepare_partner_table(mut table: Table) -> Result<Table> {
    let station_idx = find_column(&table.columns, STATION_COLUMN)
        .ok_or_else(|| ReconcileError::missing_column(InputKind::PartnerList, STATION_COLUMN))?;
    table.normalize_column(station_idx);
    Ok(table)
}

/// Load the partner list file
pub fn load_partner_list(path: &Path) -> Result<Table> {
    let table = prepare_partner_table(read_first_sheet(path)?)?;
    log::info!(
        "Loaded partner list {}: {} rows, {} columns",
        path.display(),
        table.len(),
        table.columns.len()
    );
    Ok(table)
}

/// Where the new column goes for this column list
///
/// After "терминал", else before "Адрес", else at the end.
pub fn new_column_position<S: AsRef<str>>(columns: &[S]) -> usize {
    if let Some(idx) = find_column(columns, TERMINAL_COLUMN) {
        idx + 1
    } else if let Some(idx) = find_column(columns, ADDRESS_COLUMN) {
        idx
    } else {
        columns.len()
    }
}

/// Insert an empty `name` column, or move an existing one into place
///
/// The position is computed on the columns as they are before any move.
/// Either way the column ends up blank in every row.
pub fn insert_new_terminal_column(mut table: Table, name: &str) -> Table {
    let insert_at = new_column_position(&table.columns);

    match table.column_index(name) {
        None => {
            table.columns.insert(insert_at, name.to_string());
            for row in &mut table.rows {
                row.insert(insert_at, Cell::from(""));
            }
        }
        Some(existing) => {
            log::debug!(
                "Column '{}' already present at {}, moving it to {}",
                name,
                existing,
                insert_at
            );
            let column = table.columns.remove(existing);
            let target = insert_at.min(table.columns.len());
            table.columns.insert(target, column);
            for row in &mut table.rows {
                row.remove(existing);
                row.insert(target, Cell::from(""));
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::columns::NEW_TERMINAL_COLUMN;

    fn table(columns: &[&str]) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        t.push_row(columns.iter().map(|c| Cell::from(format!("{}-1", c))).collect());
        t
    }

    fn columns(t: &Table) -> Vec<&str> {
        t.columns.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_insert_after_terminal() {
        let t = insert_new_terminal_column(table(&["A", "терминал", "B"]), NEW_TERMINAL_COLUMN);
        assert_eq!(columns(&t), vec!["A", "терминал", "новый терминал", "B"]);
        assert_eq!(t.rows[0][2], Cell::from(""));
        assert_eq!(t.rows[0][3], Cell::from("B-1"));
    }

    #[test]
    fn test_insert_before_address() {
        let t = insert_new_terminal_column(table(&["A", "Адрес", "B"]), NEW_TERMINAL_COLUMN);
        assert_eq!(columns(&t), vec!["A", "новый терминал", "Адрес", "B"]);
    }

    #[test]
    fn test_terminal_wins_over_address() {
        let t = insert_new_terminal_column(
            table(&["Адрес", "A", "Терминал"]),
            NEW_TERMINAL_COLUMN,
        );
        assert_eq!(columns(&t), vec!["Адрес", "A", "Терминал", "новый терминал"]);
    }

    #[test]
    fn test_append_when_no_anchor() {
        let t = insert_new_terminal_column(table(&["A", "B"]), NEW_TERMINAL_COLUMN);
        assert_eq!(columns(&t), vec!["A", "B", "новый терминал"]);
        assert_eq!(t.rows[0].len(), 3);
    }

    #[test]
    fn test_existing_column_is_moved_not_duplicated() {
        let t = insert_new_terminal_column(
            table(&["новый терминал", "A", "терминал", "B"]),
            NEW_TERMINAL_COLUMN,
        );
        // index 3 is taken before the removal, so the column lands one slot past "терминал"
        assert_eq!(columns(&t), vec!["A", "терминал", "B", "новый терминал"]);
        assert_eq!(t.rows[0][0], Cell::from("A-1"));
        assert_eq!(t.rows[0][3], Cell::from(""));
    }

    #[test]
    fn test_existing_column_already_in_place() {
        let t = insert_new_terminal_column(table(&["A", "новый терминал"]), NEW_TERMINAL_COLUMN);
        assert_eq!(columns(&t), vec!["A", "новый терминал"]);
        assert_eq!(t.rows[0][1], Cell::from(""));
    }

    #[test]
    fn test_prepare_requires_station_column() {
        let err = prepare_partner_table(table(&["A", "Адрес"])).unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::MissingColumn { input: InputKind::PartnerList, .. }
        ));
    }

    #[test]
    fn test_prepare_normalizes_station_codes_only() {
        let mut t = Table::new(vec!["азс".into(), "N".into()]);
        t.push_row(vec![Cell::Number(101.0), Cell::Number(3.0)]);
        t.push_row(vec![Cell::from(" 999 "), Cell::from(" x ")]);
        let t = prepare_partner_table(t).unwrap();
        assert_eq!(t.rows[0], vec![Cell::from("101"), Cell::Number(3.0)]);
        assert_eq!(t.rows[1], vec![Cell::from("999"), Cell::from(" x ")]);
    }
}
