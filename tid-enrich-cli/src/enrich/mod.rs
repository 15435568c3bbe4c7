//! Partner list enrichment from the MID/TID base registry
//!
//! The base registry is reduced to one TID value per MID, the partner list
//! gets a "новый терминал" column, and every site whose station code is a
//! known MID receives that value. Matched station codes are highlighted in
//! the written workbook.

pub mod base;
pub mod columns;
pub mod enricher;
pub mod error;
pub mod excel;
pub mod partner;
pub mod reconcile;
pub mod table;

pub use base::{BaseMapping, load_base};
pub use columns::{find_column, resolve_column};
pub use enricher::{EnrichedTable, enrich};
pub use error::{InputKind, ReconcileError};
pub use partner::{insert_new_terminal_column, load_partner_list};
pub use reconcile::{ReconcileOptions, ReconcileOutcome, reconcile, reconcile_with};
pub use table::{Cell, Table};
