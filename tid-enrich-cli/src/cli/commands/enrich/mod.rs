//! `enrich` command arguments

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_enrich_command;

#[derive(Args, Debug)]
pub struct EnrichCommands {
    /// Base registry workbook (MID, optional TID)
    #[arg(short, long, value_name = "FILE")]
    pub base: PathBuf,

    /// Partner list workbook (АЗС column)
    #[arg(short, long, value_name = "FILE")]
    pub list: PathBuf,

    /// Partner name used in the output file name
    #[arg(short, long)]
    pub partner: Option<String>,

    /// Output directory (default: config `output_dir`, then Desktop)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Name of the inserted column
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,
}
