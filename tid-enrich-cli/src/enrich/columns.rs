//! Case-insensitive column lookup and header normalization
//!
//! Pure functions over column name lists, independent of any spreadsheet
//! library.

use std::collections::HashMap;

use super::table::Cell;

/// Station code column of the partner list
pub const STATION_COLUMN: &str = "АЗС";
/// Merchant id column of the base registry
pub const MID_COLUMN: &str = "MID";
/// Terminal id column of the base registry
pub const TID_COLUMN: &str = "TID";
/// New column goes right after this one when present
pub const TERMINAL_COLUMN: &str = "терминал";
/// New column goes right before this one when there is no terminal column
pub const ADDRESS_COLUMN: &str = "Адрес";
/// Default name of the inserted column
pub const NEW_TERMINAL_COLUMN: &str = "новый терминал";

/// Index of the first column equal to `target`, ignoring case
pub fn find_column<S: AsRef<str>>(columns: &[S], target: &str) -> Option<usize> {
    let target = target.to_lowercase();
    columns
        .iter()
        .position(|c| c.as_ref().to_lowercase() == target)
}

/// Actual name of the first column equal to `target`, ignoring case
pub fn resolve_column<'a, S: AsRef<str>>(columns: &'a [S], target: &str) -> Option<&'a str> {
    find_column(columns, target).map(|idx| columns[idx].as_ref())
}

/// Turn a raw header row into unique, trimmed column names
///
/// Blank headers become `Unnamed: <index>`, repeated names get `.1`, `.2`, ...
pub fn normalize_headers(header: &[Cell]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let mut name = cell.to_text().trim().to_string();
        if name.is_empty() {
            name = format!("Unnamed: {}", idx);
        }

        let base = name.clone();
        let mut count = seen.get(&base).copied().unwrap_or(0);
        while names.contains(&name) {
            count += 1;
            name = format!("{}.{}", base, count);
        }
        seen.insert(base, count);
        names.push(name);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_find_column_ignores_case() {
        let cols = vec!["Name", "Mid", "TID"];
        assert_eq!(find_column(&cols, "MID"), Some(1));
        assert_eq!(find_column(&cols, "mid"), Some(1));
        assert_eq!(find_column(&cols, "Mid"), Some(1));
        assert_eq!(find_column(&cols, "MIDX"), None);
    }

    #[test]
    fn test_resolve_column_returns_actual_name() {
        let cols = vec!["mid".to_string(), "tid".to_string()];
        assert_eq!(resolve_column(&cols, "MID"), Some("mid"));
        assert_eq!(resolve_column(&cols, "TID"), Some("tid"));
        assert_eq!(resolve_column(&cols, "АЗС"), None);
    }

    #[test]
    fn test_cyrillic_case_insensitive() {
        let cols = vec!["азс", "АДРЕС", "Терминал"];
        assert_eq!(find_column(&cols, STATION_COLUMN), Some(0));
        assert_eq!(find_column(&cols, ADDRESS_COLUMN), Some(1));
        assert_eq!(find_column(&cols, TERMINAL_COLUMN), Some(2));
    }

    #[test]
    fn test_first_match_wins() {
        let cols = vec!["MID", "mid"];
        assert_eq!(find_column(&cols, "Mid"), Some(0));
    }

    #[test]
    fn test_normalize_headers_trims_and_stringifies() {
        let header = vec![text("  MID "), Cell::Number(2024.0), text("TID\t")];
        assert_eq!(normalize_headers(&header), vec!["MID", "2024", "TID"]);
    }

    #[test]
    fn test_normalize_headers_blank_and_duplicates() {
        let header = vec![text("A"), Cell::Empty, text("A"), text(" A "), text("B")];
        assert_eq!(
            normalize_headers(&header),
            vec!["A", "Unnamed: 1", "A.1", "A.2", "B"]
        );
    }
}
