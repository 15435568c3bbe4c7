//! `inspect` command arguments

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_inspect_command;

#[derive(Args, Debug)]
pub struct InspectCommands {
    /// Workbook to inspect (first sheet is read)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
