//! Shelf CLI - interactive console for the catalog graph.
//!
//! This is the entry point for users. It runs a numbered menu loop that
//! maps choices onto engine operations and renders their results; all the
//! actual catalog logic lives in the `shelf-graph` crate.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod menu;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author = "Shelf Contributors")]
#[command(version)]
#[command(about = "Library catalog with a book connectivity graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
    tracing::debug!(verbose = cli.verbose, "logging initialized");

    if let Err(e) = menu::run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
