//! One reconciliation run: load both inputs, enrich, write

use std::path::{Path, PathBuf};

use chrono::Local;

use super::base::load_base;
use super::columns::NEW_TERMINAL_COLUMN;
use super::enricher::enrich;
use super::error::Result;
use super::excel::{WriteOptions, output_path, write_enriched};
use super::partner::{insert_new_terminal_column, load_partner_list};

/// Knobs for a run; the defaults produce the standard output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Name of the inserted terminal column
    pub new_column: String,
    pub write: WriteOptions,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            new_column: NEW_TERMINAL_COLUMN.to_string(),
            write: WriteOptions::default(),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub matched: usize,
    pub distinct_mids: usize,
}

/// Enrich `list_path` from `base_path` and write the result into `out_dir`
///
/// Returns the path of the written workbook.
pub fn reconcile(
    base_path: &Path,
    list_path: &Path,
    partner_name: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    reconcile_with(
        base_path,
        list_path,
        partner_name,
        out_dir,
        &ReconcileOptions::default(),
    )
    .map(|outcome| outcome.path)
}

/// Same as [`reconcile`] with explicit options
///
/// Both inputs are fully validated before anything is written.
pub fn reconcile_with(
    base_path: &Path,
    list_path: &Path,
    partner_name: &str,
    out_dir: &Path,
    options: &ReconcileOptions,
) -> Result<ReconcileOutcome> {
    let mapping = load_base(base_path)?;
    let partner = load_partner_list(list_path)?;

    let partner = insert_new_terminal_column(partner, &options.new_column);
    let enriched = enrich(partner, &mapping, &options.new_column)?;

    let path = output_path(out_dir, partner_name, &Local::now().naive_local());
    let matched = write_enriched(&enriched, &mapping, &options.write, &path)?;

    Ok(ReconcileOutcome {
        path,
        rows: enriched.table.len(),
        matched,
        distinct_mids: mapping.len(),
    })
}
