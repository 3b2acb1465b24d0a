//! Linkrank CLI
//!
//! Random-surfer PageRank for a directory of linked pages.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::{LinkRankError, RankConfig};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing: --verbose wins, then RUST_LOG, then warnings only
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            err.downcast_ref::<LinkRankError>()
                .map(LinkRankError::exit_code)
                .unwrap_or(exit_codes::GENERAL_ERROR)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    }
    .with_env_overrides()?;

    match cli.command {
        Commands::Rank(args) => commands::rank::run_both(args, config, cli.format),
        Commands::Sample(args) => commands::rank::run_sample(args, config, cli.format),
        Commands::Iterate(args) => commands::rank::run_iterate(args, config, cli.format),
        Commands::Compare(args) => commands::compare::run(args, config, cli.format),
        Commands::Links(args) => commands::links::run(args, cli.format),
    }
}
