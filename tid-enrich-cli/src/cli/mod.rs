//! Command-line interface definition

pub mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use commands::enrich::EnrichCommands;
use commands::inspect::InspectCommands;

#[derive(Parser, Debug)]
#[command(name = "tid-enrich")]
#[command(about = "Fill partner station lists with terminal IDs from a MID/TID registry")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (default: <config dir>/tid-enrich/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enrich a partner list with TIDs from the base registry
    Enrich(EnrichCommands),
    /// Show how a workbook's headers are resolved
    Inspect(InspectCommands),
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
