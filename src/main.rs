//! Wordprobe - BST word frequency analysis CLI
//!
//! Counts distinct words per text file with a binary search tree and
//! reports frequencies, node depths, and probe statistics.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wordprobe::cli;

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
