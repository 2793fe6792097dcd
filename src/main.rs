//! cogcheck - heuristic static analysis CLI
//!
//! A fast, local tool that scores function complexity, finds circular
//! imports, and flags type escape hatches in TypeScript/JavaScript trees.

use anyhow::Result;
use clap::Parser;
use cogcheck::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
