//! snapdiff CLI
//!
//! Command-line interface for comparing record snapshots

use clap::{Parser, Subcommand};
use snapdiff_core::logging_facility::{init_with_level, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "snapdiff")]
#[command(about = "snapdiff - Structural comparison of record snapshots", long_about = None)]
struct Cli {
    /// Emit debug logs on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshot files
    Compare(commands::compare::CompareArgs),
    /// List supported record variants
    Variants,
}

fn main() {
    let cli = Cli::parse();
    init_with_level(
        Profile::Development,
        if cli.verbose { "debug" } else { "warn" },
    );

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Variants => commands::variants::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
