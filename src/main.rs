//! codesrock-levels - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use codesrock_levels::cli::{self, Args};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.verbosity().filter_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "starting");

    let stdout = std::io::stdout();
    cli::run(&args, &mut stdout.lock())
}
