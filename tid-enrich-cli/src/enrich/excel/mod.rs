//! Spreadsheet I/O for the reconciliation core

mod reader;
mod writer;

pub use reader::read_first_sheet;
pub use writer::{
    DEFAULT_PARTNER, HIGHLIGHT_COLOR, OUTPUT_SHEET, WriteOptions, output_file_name, output_path,
    partner_slug, write_enriched,
};
