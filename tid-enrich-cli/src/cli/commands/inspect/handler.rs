//! Inspect command handler: show normalized headers and key column resolution

use anyhow::{Context, Result};
use colored::*;

use super::InspectCommands;
use tid_enrich::enrich::columns::{
    ADDRESS_COLUMN, MID_COLUMN, STATION_COLUMN, TERMINAL_COLUMN, TID_COLUMN, resolve_column,
};
use tid_enrich::enrich::excel::read_first_sheet;
use tid_enrich::enrich::partner::new_column_position;

pub fn handle_inspect_command(args: InspectCommands) -> Result<()> {
    let table = read_first_sheet(&args.file)
        .with_context(|| format!("Failed to inspect {}", args.file.display()))?;

    println!("{} {}", "File:".bold(), args.file.display());
    println!("{} {}", "Data rows:".bold(), table.len());
    println!("{}", "Columns:".bold());
    for (idx, name) in table.columns.iter().enumerate() {
        println!("  {:>3}  {}", idx + 1, name);
    }

    println!("{}", "Key columns:".bold());
    for target in [MID_COLUMN, TID_COLUMN, STATION_COLUMN, TERMINAL_COLUMN, ADDRESS_COLUMN] {
        match resolve_column(&table.columns, target) {
            Some(actual) => println!("  {:<10} {}", target, actual.green()),
            None => println!("  {:<10} {}", target, "not found".dimmed()),
        }
    }

    if resolve_column(&table.columns, STATION_COLUMN).is_some() {
        println!(
            "{} {}",
            "New column position:".bold(),
            new_column_position(&table.columns) + 1
        );
    }

    Ok(())
}
