mod cli;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::*;
use is_terminal::IsTerminal;

use cli::commands::{enrich::handle_enrich_command, inspect::handle_inspect_command};
use cli::{Cli, Commands};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Enrich(args) => {
            let config = Config::load(cli.config.as_deref())?;
            handle_enrich_command(args, &config)
        }
        Commands::Inspect(args) => handle_inspect_command(args),
    }
}
