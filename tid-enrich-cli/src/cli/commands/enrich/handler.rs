//! Enrich command handler

use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;

use super::EnrichCommands;
use crate::config::Config;

/// Run one reconciliation and report the written file
pub fn handle_enrich_command(args: EnrichCommands, config: &Config) -> Result<()> {
    for (label, path) in [("Base file", &args.base), ("List file", &args.list)] {
        if !path.exists() {
            anyhow::bail!("{} does not exist: {}", label, path.display());
        }
    }

    let partner = args
        .partner
        .as_deref()
        .unwrap_or_else(|| config.default_partner());
    let out_dir = args.out_dir.clone().unwrap_or_else(|| config.output_dir());
    let options = config.reconcile_options(args.column.as_deref())?;

    log::info!(
        "Enriching {} from {} into {}",
        args.list.display(),
        args.base.display(),
        out_dir.display()
    );

    let start = Instant::now();
    let outcome = tid_enrich::reconcile_with(&args.base, &args.list, partner, &out_dir, &options)
        .context("Enrichment failed")?;

    log::debug!("Enrichment took {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    println!("{} {}", "File created:".bright_green().bold(), outcome.path.display());
    println!(
        "{} of {} rows matched ({} MIDs in base)",
        outcome.matched.to_string().bright_yellow(),
        outcome.rows,
        outcome.distinct_mids
    );

    Ok(())
}
