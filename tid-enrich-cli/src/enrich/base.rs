//! Base registry loading: MID -> merged TID mapping

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::columns::{MID_COLUMN, TID_COLUMN, find_column};
use super::error::{InputKind, ReconcileError, Result};
use super::excel::read_first_sheet;
use super::table::Table;

/// Separator between merged TIDs of one MID
pub const TID_SEPARATOR: &str = ", ";

/// MID -> TID lookup built once per run
///
/// TIDs of duplicate MIDs are merged into one sorted, de-duplicated,
/// comma-separated value. Blank TIDs never make it into the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseMapping {
    entries: BTreeMap<String, String>,
}

impl BaseMapping {
    /// Reduce (MID, TID) pairs into one entry per MID
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (mid, tid) in pairs {
            let mid = mid.as_ref().trim();
            if mid.is_empty() {
                continue;
            }
            let tids = groups.entry(mid.to_string()).or_default();
            let tid = tid.as_ref().trim();
            if !tid.is_empty() {
                tids.insert(tid.to_string());
            }
        }

        let entries = groups
            .into_iter()
            .map(|(mid, tids)| {
                let merged = tids.into_iter().collect::<Vec<_>>().join(TID_SEPARATOR);
                (mid, merged)
            })
            .collect();

        Self { entries }
    }

    /// Build the mapping from a loaded registry table
    pub fn from_table(table: &Table) -> Result<Self> {
        let mid_idx = find_column(&table.columns, MID_COLUMN)
            .ok_or_else(|| ReconcileError::missing_column(InputKind::Base, MID_COLUMN))?;
        let tid_idx = find_column(&table.columns, TID_COLUMN);

        if tid_idx.is_none() {
            log::info!("Base registry has no '{}' column, all TIDs are empty", TID_COLUMN);
        }

        let pairs = table.rows.iter().map(|row| {
            let mid = row[mid_idx].to_key();
            let tid = tid_idx.map(|idx| row[idx].to_key()).unwrap_or_default();
            (mid, tid)
        });

        Ok(Self::from_pairs(pairs))
    }

    pub fn get(&self, mid: &str) -> Option<&str> {
        self.entries.get(mid).map(String::as_str)
    }

    pub fn contains(&self, mid: &str) -> bool {
        self.entries.contains_key(mid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in MID order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Load the base registry file and aggregate it by MID
pub fn load_base(path: &Path) -> Result<BaseMapping> {
    let table = read_first_sheet(path)?;
    let mapping = BaseMapping::from_table(&table)?;
    log::info!(
        "Loaded base registry {}: {} rows, {} distinct MIDs",
        path.display(),
        table.len(),
        mapping.len()
    );
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::table::Cell;

    fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row);
        }
        t
    }

    #[test]
    fn test_merge_sorted_unique_non_empty() {
        let mapping = BaseMapping::from_pairs(vec![
            ("100", ""),
            ("100", "b"),
            ("100", "a"),
            ("100", "a"),
        ]);
        assert_eq!(mapping.get("100"), Some("a, b"));
    }

    #[test]
    fn test_each_mid_once() {
        let mapping = BaseMapping::from_pairs(vec![
            ("1", "x"),
            ("2", "y"),
            ("1", "z"),
            (" 2 ", "y"),
            ("3", ""),
        ]);
        assert_eq!(mapping.len(), 3);
        let keys: Vec<&str> = mapping.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(mapping.get("1"), Some("x, z"));
        assert_eq!(mapping.get("2"), Some("y"));
        assert_eq!(mapping.get("3"), Some(""));
    }

    #[test]
    fn test_blank_mid_dropped() {
        let mapping = BaseMapping::from_pairs(vec![("", "T1"), ("  ", "T2")]);
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_from_table_case_insensitive_columns() {
        let t = table(
            &["name", "mid", "Tid"],
            vec![
                vec![Cell::from("a"), Cell::Number(101.0), Cell::from(" T1 ")],
                vec![Cell::from("b"), Cell::from("101"), Cell::from("T0")],
            ],
        );
        let mapping = BaseMapping::from_table(&t).unwrap();
        assert_eq!(mapping.get("101"), Some("T0, T1"));
    }

    #[test]
    fn test_from_table_without_tid() {
        let t = table(&["MID"], vec![vec![Cell::from("5")], vec![Cell::from("6")]]);
        let mapping = BaseMapping::from_table(&t).unwrap();
        assert_eq!(mapping.get("5"), Some(""));
        assert_eq!(mapping.get("6"), Some(""));
    }

    #[test]
    fn test_from_table_missing_mid() {
        let t = table(&["MIDX", "TID"], vec![]);
        let err = BaseMapping::from_table(&t).unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::MissingColumn { input: InputKind::Base, ref column } if column == "MID"
        ));
    }
}
