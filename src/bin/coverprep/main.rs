//! Coverprep CLI - coverage instrumentation inputs for a compile step

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("coverprep=debug")
    } else {
        EnvFilter::new("coverprep=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Pkgcfg(args) => commands::pkgcfg::execute(args, &config),
        Commands::Outfilelist(args) => commands::outfilelist::execute(args),
        Commands::Prepare(args) => commands::prepare::execute(args, &config),
    }
}
