//! Minibank CLI - interactive retail banking console
//!
//! Usage:
//! ```bash
//! minibank
//! minibank --tariff tariff.json
//! minibank --log-level debug 2> minibank.log
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use minibank_business::Registry;
use minibank_core::Tariff;
use std::io;
use std::path::PathBuf;

mod commands;
mod console;
mod session;

use console::Console;

/// Minibank - savings and checking accounts with fees, transfers and month-end close
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tariff file (JSON). Built-in fees are used when omitted
    #[arg(long)]
    pub tariff: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let tariff = match &cli.tariff {
        Some(path) => Tariff::from_file(path)
            .with_context(|| format!("Failed to load tariff from {:?}", path))?,
        None => Tariff::default(),
    };
    tracing::debug!(?tariff, "Tariff loaded");

    let mut registry = Registry::new(tariff);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    session::run(&mut console, &mut registry)
}
