//! Write the enriched partner list and highlight matched station codes

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};

use crate::enrich::base::BaseMapping;
use crate::enrich::enricher::EnrichedTable;
use crate::enrich::error::{ReconcileError, Result};
use crate::enrich::table::Cell;

/// Sheet name of the output workbook
pub const OUTPUT_SHEET: &str = "Лист партнера";
/// Fill for matched station codes (#FFF9C4)
pub const HIGHLIGHT_COLOR: u32 = 0xFFF9C4;
/// Partner segment of the file name when no name was given
pub const DEFAULT_PARTNER: &str = "Partner";

/// Longest text Excel keeps in one cell, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

const FILE_PREFIX: &str = "PartnerList_Enriched";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Output sheet settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub sheet_name: String,
    pub highlight_color: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sheet_name: OUTPUT_SHEET.to_string(),
            highlight_color: HIGHLIGHT_COLOR,
        }
    }
}

/// File name segment derived from the partner name
pub fn partner_slug(partner: &str) -> String {
    let trimmed = partner.trim();
    if trimmed.is_empty() {
        return DEFAULT_PARTNER.to_string();
    }
    trimmed
        .chars()
        .map(|c| match c {
            c if c.is_whitespace() => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

/// `PartnerList_Enriched_<partner>_<YYYYMMDD_HHMMSS>.xlsx`
pub fn output_file_name(partner: &str, timestamp: &NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.xlsx",
        FILE_PREFIX,
        partner_slug(partner),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

pub fn output_path(out_dir: &Path, partner: &str, timestamp: &NaiveDateTime) -> PathBuf {
    out_dir.join(output_file_name(partner, timestamp))
}

/// Write `enriched` to `path` in one pass
///
/// Station code cells whose value is a MID in `mapping` get a solid fill.
/// The parent directory is created when missing. Returns the number of
/// highlighted cells.
pub fn write_enriched(
    enriched: &EnrichedTable,
    mapping: &BaseMapping,
    options: &WriteOptions,
    path: &Path,
) -> Result<usize> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ReconcileError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let wrap = |source: XlsxError| ReconcileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name).map_err(wrap)?;

    let highlighted = write_sheet(worksheet, enriched, mapping, options).map_err(wrap)?;

    workbook.save(path).map_err(wrap)?;

    log::info!(
        "Wrote {} rows to {} ({} station codes highlighted)",
        enriched.table.len(),
        path.display(),
        highlighted
    );

    Ok(highlighted)
}

fn write_sheet(
    ws: &mut Worksheet,
    enriched: &EnrichedTable,
    mapping: &BaseMapping,
    options: &WriteOptions,
) -> std::result::Result<usize, XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);
    let highlight_format = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(options.highlight_color));

    for (col, name) in enriched.table.columns.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    let mut highlighted = 0;

    for (row_idx, cells) in enriched.table.rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        for (col_idx, cell) in cells.iter().enumerate() {
            let col = col_idx as u16;

            if col_idx == enriched.station_column {
                let code = cell.to_key();
                if code.is_empty() {
                    continue;
                }
                let text = fit_cell_text(&code, row, col);
                if mapping.contains(&code) {
                    ws.write_string_with_format(row, col, text, &highlight_format)?;
                    highlighted += 1;
                } else {
                    ws.write_string(row, col, text)?;
                }
                continue;
            }

            write_cell(ws, row, col, cell, &datetime_format)?;
        }
    }

    ws.autofit();

    Ok(highlighted)
}

fn write_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    datetime_format: &Format,
) -> std::result::Result<(), XlsxError> {
    match cell {
        Cell::Empty => { /* Leave cell empty */ }
        Cell::Text(s) if s.is_empty() => {}
        Cell::Text(s) => {
            ws.write_string(row, col, fit_cell_text(s, row, col))?;
        }
        Cell::Number(n) => {
            ws.write_number(row, col, *n)?;
        }
        Cell::Bool(b) => {
            ws.write_boolean(row, col, *b)?;
        }
        Cell::DateTime(serial) => {
            ws.write_number_with_format(row, col, *serial, datetime_format)?;
        }
    }
    Ok(())
}

/// `text` cut to [`MAX_CELL_CHARS`] characters
fn fit_cell_text(text: &str, row: u32, col: u16) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            log::warn!(
                "Cell at row {}, column {} holds {} characters, truncated to {}",
                row + 1,
                col + 1,
                text.chars().count(),
                MAX_CELL_CHARS
            );
            &text[..cut]
        }
        None => text,
    }
}
