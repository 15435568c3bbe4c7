//! Left join of the base mapping into the partner list by station code

use super::base::BaseMapping;
use super::columns::{STATION_COLUMN, find_column};
use super::error::{InputKind, ReconcileError, Result};
use super::table::{Cell, Table};

/// Partner table with the new terminal column filled in
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTable {
    pub table: Table,
    /// Index of the station code column
    pub station_column: usize,
    /// Index of the filled terminal column
    pub new_column: usize,
    /// Per row: station code found in the mapping
    pub matched: Vec<bool>,
}

impl EnrichedTable {
    pub fn matched_count(&self) -> usize {
        self.matched.iter().filter(|m| **m).count()
    }
}

/// Fill `new_column` from the mapping for every row whose station code is a MID
///
/// `table` must already contain `new_column`. Matching is exact on the trimmed
/// code; unmatched rows get an empty value.
pub fn enrich(mut table: Table, mapping: &BaseMapping, new_column: &str) -> Result<EnrichedTable> {
    let station_column = find_column(&table.columns, STATION_COLUMN)
        .ok_or_else(|| ReconcileError::missing_column(InputKind::PartnerList, STATION_COLUMN))?;
    let new_idx = table
        .column_index(new_column)
        .ok_or_else(|| ReconcileError::missing_column(InputKind::PartnerList, new_column))?;

    let mut matched = Vec::with_capacity(table.len());

    for row in &mut table.rows {
        let code = row[station_column].to_key();
        let tid = mapping.get(&code);
        row[station_column] = Cell::Text(code);
        row[new_idx] = Cell::from(tid.unwrap_or(""));
        matched.push(tid.is_some());
    }

    let enriched = EnrichedTable {
        table,
        station_column,
        new_column: new_idx,
        matched,
    };

    log::info!(
        "Matched {} of {} partner rows against {} MIDs",
        enriched.matched_count(),
        enriched.table.len(),
        mapping.len()
    );

    Ok(enriched)
}
