mod cli;
mod collision;
mod config;
mod error;
mod logging;
mod mapping;
mod names;
mod planner;
mod scramble;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use cli::Cli;
use config::ScrambleConfig;
use scramble::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ScrambleConfig::try_from(cli).context("refusing to start")?;
    let directory = config.directory.clone();
    let report = scramble::run(config)
        .with_context(|| format!("scrambling {} failed", directory.display()))?;

    print_report(&report);
    // stdout: the map file, for scripts that want to keep it somewhere safe
    println!("{}", report.map_path.display());
    Ok(())
}

fn print_report(report: &Report) {
    if report.dry_run {
        eprintln!("{}", "dry run, nothing was renamed".bold().yellow());
        for (from, to) in report.mapping.iter() {
            eprintln!("  {} {} {}", from, "->".dimmed(), to.cyan());
        }
    }

    let verb = if report.dry_run { "would rename" } else { "renamed" };
    eprintln!(
        "{} {} {}",
        verb.bold().green(),
        report.mapping.len().bright_white(),
        if report.mapping.len() == 1 { "entry" } else { "entries" }
    );
    if !report.skipped.is_empty() {
        eprintln!(
            "{} {} (no free name found): {}",
            "skipped".bold().red(),
            report.skipped.len(),
            report.skipped.join(", ")
        );
    }
    if report.mapping.is_empty() && report.skipped.is_empty() {
        eprintln!("{}", "directory had nothing to scramble".dimmed());
    }
    eprintln!("{} {}", "map written to".bold(), report.map_path.display());
}
