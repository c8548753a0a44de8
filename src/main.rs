//! Spotkick -- penalty shootout analyzer.
//!
//! Reads a kick table from the given CSV file, derives the situational
//! columns per match, and writes the enriched table to stdout. Validation
//! diagnostics go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use spotkick::{analyzer, table};

#[derive(Parser)]
#[command(name = "spotkick")]
#[command(about = "Derive clinch flags and running score state for penalty shootout kicks", long_about = None)]
struct Cli {
    /// Input CSV file of kick records
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let kicks = table::read_kicks_from_path(&cli.input)
        .with_context(|| format!("failed to read kick table from {}", cli.input.display()))?;
    let enriched = analyzer::analyze(&kicks)?;

    let stdout = io::stdout();
    table::write_enriched(stdout.lock(), &enriched).context("failed to write output table")?;
    Ok(())
}
